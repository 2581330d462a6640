//! Static asset mirroring.

use std::fs;
use std::path::Path;

use crate::builder::BuildError;

/// Mirror the static directory into the output directory.
///
/// The destination is removed and recreated on every call so stale files
/// never survive a rebuild. Returns the number of files copied.
///
/// # Errors
///
/// Returns an error when `source` is not a directory or a copy fails.
pub fn mirror_static(source: &Path, dest: &Path) -> Result<usize, BuildError> {
    if !source.is_dir() {
        return Err(BuildError::DirectoryNotFound(source.to_path_buf()));
    }
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;
    copy_dir_recursive(source, dest)
}

fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<usize, BuildError> {
    let mut copied = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if path.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_dir_recursive(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
            tracing::debug!(file = %path.display(), "Copied static asset");
            copied += 1;
        }
    }
    Ok(copied)
}
