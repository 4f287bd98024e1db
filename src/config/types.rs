use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Project config version that predates per-plugin metadata.
pub const VERSION_2: &str = "2";

/// Project config version with a `plugins` table.
pub const VERSION_3: &str = "3";

/// Top-level project configuration from a `PROJECT.toml` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectConfig {
	/// Schema version; decides which fields the document may carry.
	pub version: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub domain: Option<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub project_name: Option<String>,

	/// Plugin chain used to scaffold the project.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub layout: Vec<String>,

	/// Per-plugin settings keyed by plugin key. Version 3 only.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub plugins: BTreeMap<String, toml::Table>,
}

impl Default for ProjectConfig {
	fn default() -> Self {
		ProjectConfig {
			version: VERSION_3.to_string(),
			domain: None,
			project_name: None,
			layout: Vec::new(),
			plugins: BTreeMap::new(),
		}
	}
}

impl ProjectConfig {
	/// Validate the schema version and version-specific fields.
	pub fn validate(&self) -> Result<(), ConfigError> {
		match self.version.as_str() {
			VERSION_3 => Ok(()),
			VERSION_2 if self.plugins.is_empty() => Ok(()),
			VERSION_2 => Err(ConfigError::UnsupportedField {
				version: self.version.clone(),
				field: "plugins".to_string(),
			}),
			_ => Err(ConfigError::UnsupportedVersion {
				version: self.version.clone(),
			}),
		}
	}

	pub fn supports_plugins(&self) -> bool {
		self.version == VERSION_3
	}

	/// Stored settings for a plugin, if any.
	pub fn plugin_config(&self, key: &str) -> Option<&toml::Table> {
		self.plugins.get(key)
	}
}
