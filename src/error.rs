use std::path::PathBuf;

/// Failures while rewriting scaffolded files.
///
/// Every I/O variant carries the project-relative path that failed so the
/// host pipeline can report exactly which template file was missing or
/// unwritable.
#[derive(Debug, thiserror::Error)]
pub enum SubstitutionError {
	#[error("error reading file for substitution: {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("error reading file info for substitution: {path}")]
	Stat {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("error writing substituted file: {path}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid regex pattern in substitution: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

impl SubstitutionError {
	/// The file path involved, if this is an I/O failure.
	pub fn path(&self) -> Option<&std::path::Path> {
		match self {
			SubstitutionError::Read { path, .. }
			| SubstitutionError::Stat { path, .. }
			| SubstitutionError::Write { path, .. } => Some(path),
			SubstitutionError::InvalidRegex { .. } => None,
		}
	}
}

/// Errors from the project configuration document and its plugin table.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The document's schema version has no room for the requested field.
	/// Callers recording optional metadata treat this as success.
	#[error("field {field:?} is not supported by project config version {version}")]
	UnsupportedField { version: String, field: String },

	#[error("Unsupported project config version: {version}")]
	UnsupportedVersion { version: String },

	#[error("Failed to encode plugin config for {key}")]
	Encode {
		key: String,
		#[source]
		source: toml::ser::Error,
	},

	#[error("Failed to read project config: {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse project config: {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to serialize project config: {path}")]
	Serialize {
		path: PathBuf,
		#[source]
		source: toml::ser::Error,
	},

	#[error("Failed to write project config: {path}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl ConfigError {
	pub fn is_unsupported_field(&self) -> bool {
		matches!(self, ConfigError::UnsupportedField { .. })
	}
}

/// Errors surfaced by the scaffold step.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
	#[error("error replacing images and versions")]
	ImageSubstitution(#[source] SubstitutionError),

	#[error("error writing plugin config for {key}")]
	PluginConfig {
		key: String,
		#[source]
		source: ConfigError,
	},
}

/// Result type alias using ScaffoldError.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error as _;
	use std::io;

	#[test]
	fn test_substitution_error_path() {
		let err = SubstitutionError::Read {
			path: PathBuf::from("go.mod"),
			source: io::Error::from(io::ErrorKind::NotFound),
		};
		assert_eq!(err.path(), Some(std::path::Path::new("go.mod")));
		assert!(err.to_string().contains("go.mod"));
	}

	#[test]
	fn test_scaffold_error_keeps_source_chain() {
		let err = ScaffoldError::ImageSubstitution(SubstitutionError::Stat {
			path: PathBuf::from("Dockerfile"),
			source: io::Error::from(io::ErrorKind::NotFound),
		});
		let source = err.source().unwrap();
		assert!(source.to_string().contains("Dockerfile"));
	}

	#[test]
	fn test_plugin_config_error_names_key() {
		let err = ScaffoldError::PluginConfig {
			key: "example.io/v1".to_string(),
			source: ConfigError::UnsupportedVersion {
				version: "9".to_string(),
			},
		};
		assert_eq!(err.to_string(), "error writing plugin config for example.io/v1");
	}

	#[test]
	fn test_is_unsupported_field() {
		let unsupported = ConfigError::UnsupportedField {
			version: "2".to_string(),
			field: "plugins".to_string(),
		};
		assert!(unsupported.is_unsupported_field());

		let other = ConfigError::UnsupportedVersion {
			version: "9".to_string(),
		};
		assert!(!other.is_unsupported_field());
	}
}
