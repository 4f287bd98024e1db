//! Filesystem abstraction for the scaffold step.
//!
//! All paths are POSIX-style and relative to the generated project root.
//! The scaffold step only needs to read, stat and write whole files, so the
//! trait stays that small.

pub mod memory;
pub mod os;

pub use memory::MemFilesystem;
pub use os::OsFilesystem;

use std::io;
use std::path::Path;

/// Metadata captured before a file is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
	/// Permission bits (e.g. `0o644`).
	pub mode: u32,
}

/// A backing store the scaffold step can read and rewrite files in.
pub trait Filesystem {
	/// Read the full content of a file.
	fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

	/// Return the file's permission bits.
	fn stat(&self, path: &Path) -> io::Result<FileInfo>;

	/// Replace the file's content and set its permission bits to `mode`.
	fn write_file(&mut self, path: &Path, data: &[u8], mode: u32) -> io::Result<()>;
}
