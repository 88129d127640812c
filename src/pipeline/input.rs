//! Input validation: check the source path before the engine is touched.
//!
//! Validation happens first so that a missing or unreadable input produces
//! a precise error without requiring the native pdfium library to be
//! present, and so that no output directory is created for an input that
//! can never convert. The `%PDF` magic check catches the common case of
//! pointing the tool at the wrong file; deeper structural problems are left
//! to pdfium and surface as `CorruptPdf`.

use crate::error::Pdf2JpgError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate that `path` exists, is readable, and starts with the PDF magic
/// bytes. Returns the path unchanged on success.
pub fn resolve_input(path: &Path) -> Result<PathBuf, Pdf2JpgError> {
    if !path.exists() {
        return Err(Pdf2JpgError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::File::open(path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            // Files shorter than the magic are left for pdfium to reject.
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(Pdf2JpgError::NotAPdf {
                    path: path.to_path_buf(),
                    magic,
                });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2JpgError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(Pdf2JpgError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("Resolved input PDF: {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_file_not_found() {
        let err = resolve_input(Path::new("/nonexistent/doc.pdf")).unwrap_err();
        assert!(matches!(err, Pdf2JpgError::FileNotFound { .. }));
    }

    #[test]
    fn non_pdf_content_is_rejected_with_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello world").unwrap();

        match resolve_input(&path).unwrap_err() {
            Pdf2JpgError::NotAPdf { magic, .. } => assert_eq!(&magic, b"hell"),
            other => panic!("expected NotAPdf, got {other:?}"),
        }
    }

    #[test]
    fn pdf_magic_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"%PDF-1.7\n%rest-of-document").unwrap();

        let resolved = resolve_input(&path).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn tiny_file_is_deferred_to_pdfium() {
        // A 2-byte file cannot fail the magic check; pdfium reports it as
        // corrupt when loading.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.pdf");
        std::fs::write(&path, b"%P").unwrap();
        assert!(resolve_input(&path).is_ok());
    }
}
