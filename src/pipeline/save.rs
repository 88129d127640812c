//! Output persistence: directory creation and `page-<N>.jpg` file writes.
//!
//! Naming is deterministic (1-based page number), so re-running a
//! conversion overwrites the previous run's files in place. Nothing is
//! cleaned up on failure; a partial run leaves the pages written so far.

use crate::error::Pdf2JpgError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name for a page, `page-<N>.jpg` with N 1-based.
pub fn page_file_name(page_num: usize) -> String {
    format!("page-{page_num}.jpg")
}

/// Create the output directory if absent. Existing directories are fine.
pub fn ensure_output_dir(dir: &Path) -> Result<(), Pdf2JpgError> {
    std::fs::create_dir_all(dir).map_err(|e| Pdf2JpgError::OutputDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Write one encoded page into `dir`, overwriting any previous file of the
/// same name. Returns the written path.
pub fn write_page(dir: &Path, page_num: usize, bytes: &[u8]) -> Result<PathBuf, Pdf2JpgError> {
    let path = dir.join(page_file_name(page_num));

    std::fs::write(&path, bytes).map_err(|e| Pdf2JpgError::OutputWriteFailed {
        path: path.clone(),
        source: e,
    })?;

    debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_are_one_based_jpg() {
        assert_eq!(page_file_name(1), "page-1.jpg");
        assert_eq!(page_file_name(42), "page-42.jpg");
    }

    #[test]
    fn ensure_output_dir_creates_nested_and_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a/b/pages");

        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Second call on an existing directory must not error.
        ensure_output_dir(&dir).unwrap();
    }

    #[test]
    fn write_page_roundtrip_and_overwrite() {
        let tmp = tempfile::tempdir().unwrap();

        let first = write_page(tmp.path(), 3, b"first").unwrap();
        assert_eq!(first.file_name().unwrap(), "page-3.jpg");
        assert_eq!(std::fs::read(&first).unwrap(), b"first");

        let second = write_page(tmp.path(), 3, b"second-run").unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), b"second-run");
    }

    #[test]
    fn write_page_into_missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("never-created");
        let err = write_page(&missing, 1, b"data").unwrap_err();
        assert!(matches!(err, Pdf2JpgError::OutputWriteFailed { .. }));
    }
}
