//! ocp-scaffold - post-init step that points freshly scaffolded operator
//! projects at OpenShift downstream images.
//!
//! This library provides:
//! - A static table of per-file image and version substitutions
//! - An applier that rewrites those files through a virtual filesystem
//! - The init step that runs the applier and records its plugin marker in
//!   the project config
//!
//! # Example
//!
//! ```no_run
//! use ocp_scaffold::config::{PROJECT_FILE, parse_project_file, write_project_file};
//! use ocp_scaffold::scaffold::InitSubcommand;
//! use ocp_scaffold::vfs::OsFilesystem;
//! use std::path::Path;
//!
//! let project_dir = Path::new("memcached-operator");
//! let project_file = project_dir.join(PROJECT_FILE);
//! let mut config = parse_project_file(&project_file).unwrap();
//! let mut fs = OsFilesystem::new(project_dir);
//!
//! InitSubcommand::new(&mut config).scaffold(&mut fs).unwrap();
//! write_project_file(&project_file, &config).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod scaffold;
pub mod substitutions;
pub mod vfs;

pub use error::{ConfigError, Result, ScaffoldError, SubstitutionError};
