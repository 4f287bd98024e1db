//! Image and version substitutions for freshly scaffolded projects.
//!
//! This module handles:
//! - The static table of per-file regex rewrites
//! - Applying that table to a [`Filesystem`](crate::vfs::Filesystem)

pub mod applier;
pub mod table;

pub use applier::replace_images;
pub use table::{
	AUTH_PROXY_PATCH_PATH, DOCKERFILE_PATH, GO_MOD_PATH, OCP_PRODUCT_VERSION, SubstitutionRule,
	SubstitutionTable, UBI_MINIMAL_VERSION, compile_rules, openshift_table,
};
