use crate::vfs::{FileInfo, Filesystem};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Disk-backed filesystem rooted at the generated project directory.
#[derive(Debug, Clone)]
pub struct OsFilesystem {
	root: PathBuf,
}

impl OsFilesystem {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	fn resolve(&self, path: &Path) -> PathBuf {
		self.root.join(path)
	}
}

#[cfg(unix)]
fn mode_of(metadata: &fs::Metadata) -> u32 {
	use std::os::unix::fs::PermissionsExt;
	metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn mode_of(metadata: &fs::Metadata) -> u32 {
	if metadata.permissions().readonly() {
		0o444
	} else {
		0o644
	}
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
	use std::os::unix::fs::PermissionsExt;
	fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
	let mut permissions = fs::metadata(path)?.permissions();
	permissions.set_readonly(mode & 0o222 == 0);
	fs::set_permissions(path, permissions)
}

impl Filesystem for OsFilesystem {
	fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
		fs::read(self.resolve(path))
	}

	fn stat(&self, path: &Path) -> io::Result<FileInfo> {
		let metadata = fs::metadata(self.resolve(path))?;
		Ok(FileInfo {
			mode: mode_of(&metadata),
		})
	}

	fn write_file(&mut self, path: &Path, data: &[u8], mode: u32) -> io::Result<()> {
		let full_path = self.resolve(path);
		fs::write(&full_path, data)?;
		set_mode(&full_path, mode)
	}
}
