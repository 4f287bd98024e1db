use crate::config::types::ProjectConfig;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Identity key this extension records its settings under.
///
/// Must not change between releases: re-running init replaces the entry under
/// this key rather than adding a second one.
pub const PLUGIN_KEY: &str = "openshift.sdk.operatorframework.io/v1";

/// Settings recorded for this extension. Its presence marks the project as
/// processed; it has no fields of its own yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMarker {}

/// A configuration document that can hold per-plugin settings.
pub trait PluginConfigStore {
	/// Store `payload` under `key`, replacing any previous entry.
	///
	/// Returns [`ConfigError::UnsupportedField`] when the document's schema has
	/// no place for plugin settings.
	fn encode_plugin_config<T: Serialize>(&mut self, key: &str, payload: &T) -> Result<(), ConfigError>;
}

impl PluginConfigStore for ProjectConfig {
	fn encode_plugin_config<T: Serialize>(&mut self, key: &str, payload: &T) -> Result<(), ConfigError> {
		if !self.supports_plugins() {
			return Err(ConfigError::UnsupportedField {
				version: self.version.clone(),
				field: "plugins".to_string(),
			});
		}

		let table = toml::Table::try_from(payload).map_err(|source| ConfigError::Encode {
			key: key.to_string(),
			source,
		})?;
		self.plugins.insert(key.to_string(), table);
		Ok(())
	}
}
