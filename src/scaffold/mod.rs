//! The OpenShift init step.
//!
//! Runs after the upstream init step has written its templates: swaps
//! upstream images for their OpenShift equivalents, then records this
//! plugin's (empty) settings in the project config.

use crate::config::{PLUGIN_KEY, PluginConfigStore, PluginMarker};
use crate::error::{Result, ScaffoldError};
use crate::substitutions::{SubstitutionTable, openshift_table, replace_images};
use crate::vfs::Filesystem;

/// Scaffolder for the `init` subcommand, bound to the project's config.
pub struct InitSubcommand<'a, C: PluginConfigStore> {
	config: &'a mut C,
	table: &'a SubstitutionTable,
}

impl<'a, C: PluginConfigStore> InitSubcommand<'a, C> {
	/// Inject the project config and use the built-in substitution table.
	pub fn new(config: &'a mut C) -> Self {
		InitSubcommand {
			config,
			table: openshift_table(),
		}
	}

	/// Use a different substitution table.
	pub fn with_table(mut self, table: &'a SubstitutionTable) -> Self {
		self.table = table;
		self
	}

	/// Update a newly initialized project with OpenShift-specific configuration.
	pub fn scaffold(&mut self, fs: &mut dyn Filesystem) -> Result<()> {
		replace_images(fs, self.table).map_err(ScaffoldError::ImageSubstitution)?;

		match self
			.config
			.encode_plugin_config(PLUGIN_KEY, &PluginMarker::default())
		{
			Ok(()) => {}
			Err(e) if e.is_unsupported_field() => {
				tracing::debug!(key = PLUGIN_KEY, "project config has no plugin settings; skipping marker");
			}
			Err(source) => {
				return Err(ScaffoldError::PluginConfig {
					key: PLUGIN_KEY.to_string(),
					source,
				});
			}
		}

		tracing::info!(files = self.table.len(), "applied OpenShift image substitutions");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ProjectConfig;
	use crate::error::{ConfigError, SubstitutionError};
	use crate::substitutions::{AUTH_PROXY_PATCH_PATH, DOCKERFILE_PATH, GO_MOD_PATH};
	use crate::vfs::MemFilesystem;
	use serde::Serialize;
	use std::path::Path;

	/// Store that rejects plugin settings like a version 2 document.
	struct UnsupportedStore;

	impl PluginConfigStore for UnsupportedStore {
		fn encode_plugin_config<T: Serialize>(&mut self, _key: &str, _payload: &T) -> std::result::Result<(), ConfigError> {
			Err(ConfigError::UnsupportedField {
				version: "2".to_string(),
				field: "plugins".to_string(),
			})
		}
	}

	/// Store that fails with a non-tolerated error and counts calls.
	#[derive(Default)]
	struct BrokenStore {
		calls: usize,
	}

	impl PluginConfigStore for BrokenStore {
		fn encode_plugin_config<T: Serialize>(&mut self, _key: &str, _payload: &T) -> std::result::Result<(), ConfigError> {
			self.calls += 1;
			Err(ConfigError::UnsupportedVersion {
				version: "9".to_string(),
			})
		}
	}

	fn scaffolded_fs() -> MemFilesystem {
		MemFilesystem::new()
			.with_file(
				DOCKERFILE_PATH,
				"FROM golang:1.19 as builder\nFROM gcr.io/distroless/static:nonroot\n",
				0o644,
			)
			.with_file(GO_MOD_PATH, "module x\n\ngo 1.19\n", 0o644)
			.with_file(
				AUTH_PROXY_PATCH_PATH,
				"        image: gcr.io/kubebuilder/kube-rbac-proxy:v0.13.1\n",
				0o644,
			)
	}

	#[test]
	fn test_scaffold_rewrites_and_records_marker() {
		let mut fs = scaffolded_fs();
		let mut config = ProjectConfig::default();

		InitSubcommand::new(&mut config).scaffold(&mut fs).unwrap();

		assert_eq!(
			fs.contents_str(DOCKERFILE_PATH),
			Some(
				"FROM golang:1.20 as builder\nFROM registry.access.redhat.com/ubi8/ubi-minimal:8.8\n"
			)
		);
		assert_eq!(fs.contents_str(GO_MOD_PATH), Some("module x\n\ngo 1.20\n"));
		assert!(config.plugin_config(PLUGIN_KEY).is_some());
	}

	#[test]
	fn test_scaffold_twice_succeeds() {
		let mut fs = scaffolded_fs();
		let mut config = ProjectConfig::default();

		InitSubcommand::new(&mut config).scaffold(&mut fs).unwrap();
		let after_first = fs.clone();
		InitSubcommand::new(&mut config).scaffold(&mut fs).unwrap();

		for path in after_first.paths() {
			assert_eq!(fs.contents(path), after_first.contents(path));
		}
		assert_eq!(config.plugins.len(), 1);
	}

	#[test]
	fn test_unsupported_field_is_tolerated() {
		let mut fs = scaffolded_fs();
		let mut store = UnsupportedStore;

		InitSubcommand::new(&mut store).scaffold(&mut fs).unwrap();

		assert_eq!(fs.contents_str(GO_MOD_PATH), Some("module x\n\ngo 1.20\n"));
	}

	#[test]
	fn test_version_2_project_is_tolerated() {
		let mut fs = scaffolded_fs();
		let mut config = ProjectConfig {
			version: "2".to_string(),
			..Default::default()
		};

		InitSubcommand::new(&mut config).scaffold(&mut fs).unwrap();

		assert!(config.plugins.is_empty());
	}

	#[test]
	fn test_other_store_errors_name_the_key() {
		let mut fs = scaffolded_fs();
		let mut store = BrokenStore::default();

		let err = InitSubcommand::new(&mut store)
			.scaffold(&mut fs)
			.unwrap_err();

		match err {
			ScaffoldError::PluginConfig { key, source } => {
				assert_eq!(key, PLUGIN_KEY);
				assert!(matches!(source, ConfigError::UnsupportedVersion { .. }));
			}
			other => panic!("Expected PluginConfig error, got {other:?}"),
		}
		assert_eq!(store.calls, 1);
	}

	#[test]
	fn test_missing_file_skips_marker() {
		let mut fs = MemFilesystem::new()
			.with_file(DOCKERFILE_PATH, "FROM gcr.io/distroless/static:nonroot\n", 0o644)
			.with_file(GO_MOD_PATH, "go 1.19\n", 0o644);
		let mut store = BrokenStore::default();

		let err = InitSubcommand::new(&mut store)
			.scaffold(&mut fs)
			.unwrap_err();

		match err {
			ScaffoldError::ImageSubstitution(SubstitutionError::Read { path, .. }) => {
				assert_eq!(path, Path::new(AUTH_PROXY_PATCH_PATH));
			}
			other => panic!("Expected ImageSubstitution read error, got {other:?}"),
		}
		assert_eq!(store.calls, 0);
		assert_eq!(fs.contents_str(GO_MOD_PATH), Some("go 1.19\n"));
	}

	#[test]
	fn test_custom_table() {
		let table = {
			let mut table = SubstitutionTable::new();
			table.insert(
				"Makefile",
				crate::substitutions::compile_rules(&[(r"IMG \?= \S+", "IMG ?= controller:latest")])
					.unwrap(),
			);
			table
		};
		let mut fs = MemFilesystem::new().with_file("Makefile", "IMG ?= example.com/op:v0.0.1\n", 0o644);
		let mut config = ProjectConfig::default();

		InitSubcommand::new(&mut config)
			.with_table(&table)
			.scaffold(&mut fs)
			.unwrap();

		assert_eq!(fs.contents_str("Makefile"), Some("IMG ?= controller:latest\n"));
	}
}
