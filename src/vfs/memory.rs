use crate::vfs::{FileInfo, Filesystem};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct MemFile {
	data: Vec<u8>,
	mode: u32,
}

/// In-memory filesystem keyed by project-relative path.
#[derive(Debug, Clone, Default)]
pub struct MemFilesystem {
	files: BTreeMap<PathBuf, MemFile>,
	read_only: bool,
}

impl MemFilesystem {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`MemFilesystem::insert`].
	pub fn with_file(mut self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>, mode: u32) -> Self {
		self.insert(path, data, mode);
		self
	}

	/// Add or replace a file, bypassing the read-only flag.
	pub fn insert(&mut self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>, mode: u32) {
		self.files.insert(
			path.into(),
			MemFile {
				data: data.into(),
				mode,
			},
		);
	}

	/// Make every subsequent `write_file` fail with `PermissionDenied`.
	pub fn set_read_only(&mut self, read_only: bool) {
		self.read_only = read_only;
	}

	pub fn contents(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
		self.files.get(path.as_ref()).map(|f| f.data.as_slice())
	}

	/// Contents as UTF-8, for assertions on text templates.
	pub fn contents_str(&self, path: impl AsRef<Path>) -> Option<&str> {
		self.contents(path).and_then(|b| std::str::from_utf8(b).ok())
	}

	pub fn mode(&self, path: impl AsRef<Path>) -> Option<u32> {
		self.files.get(path.as_ref()).map(|f| f.mode)
	}

	pub fn paths(&self) -> impl Iterator<Item = &Path> {
		self.files.keys().map(PathBuf::as_path)
	}

	fn not_found(path: &Path) -> io::Error {
		io::Error::new(
			io::ErrorKind::NotFound,
			format!("file does not exist: {}", path.display()),
		)
	}
}

impl Filesystem for MemFilesystem {
	fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
		self.files
			.get(path)
			.map(|f| f.data.clone())
			.ok_or_else(|| Self::not_found(path))
	}

	fn stat(&self, path: &Path) -> io::Result<FileInfo> {
		self.files
			.get(path)
			.map(|f| FileInfo { mode: f.mode })
			.ok_or_else(|| Self::not_found(path))
	}

	fn write_file(&mut self, path: &Path, data: &[u8], mode: u32) -> io::Result<()> {
		if self.read_only {
			return Err(io::Error::new(
				io::ErrorKind::PermissionDenied,
				format!("read-only filesystem: {}", path.display()),
			));
		}
		self.insert(path, data, mode);
		Ok(())
	}
}
