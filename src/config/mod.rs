//! Project configuration for ocp-scaffold.
//!
//! This module handles:
//! - TOML parsing and writing of the `PROJECT.toml` document
//! - Schema-version validation
//! - Per-plugin settings through the [`PluginConfigStore`] trait

pub mod parser;
pub mod store;
pub mod types;

pub use parser::{PROJECT_FILE, parse_project_file, parse_project_str, write_project_file};
pub use store::{PLUGIN_KEY, PluginConfigStore, PluginMarker};
pub use types::{ProjectConfig, VERSION_2, VERSION_3};
