use crate::error::SubstitutionError;
use crate::substitutions::table::SubstitutionTable;
use crate::vfs::Filesystem;
use std::borrow::Cow;
use std::path::Path;

/// Rewrite every file listed in `table` in place.
///
/// Each file is read, its mode captured, its rules applied in order and the
/// result written back with the same mode. A rule that matches nothing is
/// skipped. The first failure aborts the run; files already rewritten stay
/// rewritten.
pub fn replace_images(
	fs: &mut dyn Filesystem,
	table: &SubstitutionTable,
) -> Result<(), SubstitutionError> {
	for (file_path, rules) in table.iter() {
		let path = Path::new(file_path);

		let mut content = fs
			.read_file(path)
			.map_err(|source| SubstitutionError::Read {
				path: path.to_path_buf(),
				source,
			})?;
		let info = fs.stat(path).map_err(|source| SubstitutionError::Stat {
			path: path.to_path_buf(),
			source,
		})?;

		for rule in rules {
			let replaced = match rule.apply(&content) {
				Cow::Borrowed(_) => continue,
				Cow::Owned(replaced) => replaced,
			};
			tracing::debug!(
				path = file_path,
				pattern = %rule.pattern,
				replacement = %rule.replacement,
				"applied substitution"
			);
			content = replaced;
		}

		fs.write_file(path, &content, info.mode)
			.map_err(|source| SubstitutionError::Write {
				path: path.to_path_buf(),
				source,
			})?;
		tracing::debug!(path = file_path, mode = %format!("{:o}", info.mode), "rewrote file");
	}

	Ok(())
}
