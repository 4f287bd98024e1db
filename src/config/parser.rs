use crate::config::types::ProjectConfig;
use crate::error::ConfigError;
use std::path::Path;

/// File name of the project configuration document.
pub const PROJECT_FILE: &str = "PROJECT.toml";

/// Parse a project config file from the given path.
pub fn parse_project_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
		path: path.to_path_buf(),
		source,
	})?;

	parse_project_str(&content, path)
}

/// Parse a project config from a string (useful for testing).
pub fn parse_project_str(content: &str, path: &Path) -> Result<ProjectConfig, ConfigError> {
	let config: ProjectConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
		path: path.to_path_buf(),
		source,
	})?;

	config.validate()?;

	Ok(config)
}

/// Serialize and write a project config to the given path.
pub fn write_project_file(path: &Path, config: &ProjectConfig) -> Result<(), ConfigError> {
	let content = toml::to_string_pretty(config).map_err(|source| ConfigError::Serialize {
		path: path.to_path_buf(),
		source,
	})?;

	std::fs::write(path, content).map_err(|source| ConfigError::Write {
		path: path.to_path_buf(),
		source,
	})
}
