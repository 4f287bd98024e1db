use crate::error::SubstitutionError;
use regex::bytes::{NoExpand, Regex};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// The current OCP release version.
pub const OCP_PRODUCT_VERSION: &str = "4.14";

/// The currently used version of the ubi8/ubi-minimal and ubi8/ubi-micro images.
pub const UBI_MINIMAL_VERSION: &str = "8.8";

/// Path of the kube-rbac-proxy patch written by the upstream init step.
pub const AUTH_PROXY_PATCH_PATH: &str = "config/default/manager_auth_proxy_patch.yaml";

pub const DOCKERFILE_PATH: &str = "Dockerfile";

pub const GO_MOD_PATH: &str = "go.mod";

/// An image tag or module version: everything up to whitespace or a quote.
const TAG: &str = r#"[^\s"']+"#;

/// A single pattern-to-replacement rewrite.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
	/// The pattern to match.
	pub pattern: Regex,

	/// Literal replacement text. `$` has no special meaning.
	pub replacement: String,
}

impl SubstitutionRule {
	pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, SubstitutionError> {
		let pattern = Regex::new(pattern).map_err(|source| SubstitutionError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})?;
		Ok(SubstitutionRule {
			pattern,
			replacement: replacement.into(),
		})
	}

	/// Replace every non-overlapping match, left to right.
	///
	/// Returns `Cow::Borrowed` when nothing matched.
	pub fn apply<'a>(&self, content: &'a [u8]) -> Cow<'a, [u8]> {
		self.pattern
			.replace_all(content, NoExpand(self.replacement.as_bytes()))
	}
}

/// Relative file path to the ordered rules applied to that file.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
	entries: BTreeMap<String, Vec<SubstitutionRule>>,
}

impl SubstitutionTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register the rules for a file, replacing any previous entry.
	pub fn insert(&mut self, path: impl Into<String>, rules: Vec<SubstitutionRule>) {
		self.entries.insert(path.into(), rules);
	}

	/// Rules for an exact relative path; empty when the file is not listed.
	pub fn rules_for(&self, path: &str) -> &[SubstitutionRule] {
		self.entries.get(path).map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[SubstitutionRule])> {
		self.entries
			.iter()
			.map(|(path, rules)| (path.as_str(), rules.as_slice()))
	}

	pub fn paths(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Compile `(pattern, replacement)` pairs into rules, keeping their order.
pub fn compile_rules(pairs: &[(&str, &str)]) -> Result<Vec<SubstitutionRule>, SubstitutionError> {
	pairs
		.iter()
		.map(|(pattern, replacement)| SubstitutionRule::new(pattern, *replacement))
		.collect()
}

fn build_openshift_table() -> Result<SubstitutionTable, SubstitutionError> {
	let proxy_image = format!("registry.redhat.io/openshift4/ose-kube-rbac-proxy:v{OCP_PRODUCT_VERSION}");
	let ansible_image = format!("registry.redhat.io/openshift4/ose-ansible-operator:v{OCP_PRODUCT_VERSION}");
	let helm_image = format!("registry.redhat.io/openshift4/ose-helm-operator:v{OCP_PRODUCT_VERSION}");
	let ubi_minimal = format!("registry.access.redhat.com/ubi8/ubi-minimal:{UBI_MINIMAL_VERSION}");
	let ubi_micro = format!("registry.access.redhat.com/ubi8/ubi-micro:{UBI_MINIMAL_VERSION}");

	let proxy_pattern = format!(r"gcr\.io/kubebuilder/kube-rbac-proxy:{TAG}");
	let ansible_pattern = format!(r"quay\.io/operator-framework/ansible-operator:{TAG}");
	let helm_pattern = format!(r"quay\.io/operator-framework/helm-operator:{TAG}");
	let distroless_pattern = format!(r"gcr\.io/distroless/static:{TAG}");
	let golang_pattern = format!(r"golang:{TAG}");
	let ubi_micro_pattern = format!(r"registry\.access\.redhat\.com/ubi8/ubi-micro:{TAG}");
	let x_net_pattern = format!(r"golang\.org/x/net v{TAG}");

	let mut table = SubstitutionTable::new();

	table.insert(
		AUTH_PROXY_PATCH_PATH,
		compile_rules(&[(proxy_pattern.as_str(), proxy_image.as_str())])?,
	);

	// The golang builder image and the go.mod pins below move Go projects to
	// Go 1.20+ and golang.org/x/net v0.17.0 for CVE-2023-44487 and
	// CVE-2023-39325. Drop them once the upstream scaffolds default to these.
	table.insert(
		DOCKERFILE_PATH,
		compile_rules(&[
			// Ansible
			(ansible_pattern.as_str(), ansible_image.as_str()),
			// Helm
			(helm_pattern.as_str(), helm_image.as_str()),
			// Go
			(distroless_pattern.as_str(), ubi_minimal.as_str()),
			(golang_pattern.as_str(), "golang:1.20"),
			// Hybrid Helm
			(ubi_micro_pattern.as_str(), ubi_micro.as_str()),
		])?,
	);

	table.insert(
		GO_MOD_PATH,
		compile_rules(&[
			(x_net_pattern.as_str(), "golang.org/x/net v0.17.0"),
			(r"go 1\.1?[0-9](?:\.[0-9]+)?\b", "go 1.20"),
		])?,
	);

	Ok(table)
}

static OPENSHIFT_TABLE: LazyLock<SubstitutionTable> = LazyLock::new(|| {
	build_openshift_table().expect("built-in substitution patterns must compile")
});

/// The built-in upstream-to-OpenShift image and version substitutions.
pub fn openshift_table() -> &'static SubstitutionTable {
	&OPENSHIFT_TABLE
}
