//! Output directory preparation.

use std::fs;
use std::path::Path;

use tracing::info;

use super::error::ConvertError;

/// Make sure `dir` exists, creating missing parents.
///
/// Calling this on an existing directory does nothing.
///
/// # Errors
/// Returns [`ConvertError::CreateDir`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), ConvertError> {
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|source| ConvertError::CreateDir { path: dir.to_path_buf(), source })?;
    info!("📁 Created directory: {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_nested_directories() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("public").join("audio");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_existing_directory_is_noop() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("keep.mp3"), b"x").unwrap();

        ensure_dir(root.path()).unwrap();
        ensure_dir(root.path()).unwrap();
        assert!(root.path().join("keep.mp3").exists());
    }

    #[test]
    fn test_file_in_the_way_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("audio");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = ensure_dir(&blocker.join("nested")).unwrap_err();
        assert!(matches!(err, ConvertError::CreateDir { .. }));
    }
}
