//! Error types for the pdf2jpg library.
//!
//! Every failure mode gets its own narrowly-scoped variant so callers (and
//! users reading CLI output) can tell an unreadable input from a corrupt
//! document from a full disk. The categories:
//!
//! * input errors: the path itself is unusable (missing, unreadable, not a
//!   PDF at all);
//! * document errors: pdfium rejected the file (corrupt, encrypted, wrong
//!   password) or the page selection is empty;
//! * conversion errors: a specific page failed to rasterise or encode;
//! * output errors: the directory or a page file could not be written;
//! * engine errors: the native pdfium library is unavailable.
//!
//! Any conversion error aborts the run; pages written before the failure
//! stay on disk.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2jpg library.
#[derive(Debug, Error)]
pub enum Pdf2JpgError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── Document errors ───────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// The page selection matched nothing in the document.
    #[error("Page selection matched no pages (document has {total} pages)")]
    PageOutOfRange { total: usize },

    // ── Conversion errors ─────────────────────────────────────────────────
    /// pdfium returned an error while rasterising a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    /// JPEG encoding failed for a specific page.
    #[error("JPEG encoding failed for page {page}: {source}")]
    EncodingFailed {
        page: usize,
        #[source]
        source: image::ImageError,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create the output directory.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not write a page file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Engine errors ─────────────────────────────────────────────────────
    /// Could not install or bind the native pdfium library.
    #[error(
        "PDF rendering engine unavailable: {0}\n\n\
PDFium is normally downloaded automatically on first run.\n\
If that failed, you can install it manually:\n\
  macOS:   download libpdfium.dylib from github.com/bblanchon/pdfium-binaries\n\
  Linux:   download libpdfium.so from github.com/bblanchon/pdfium-binaries\n\
  Windows: download pdfium.dll from github.com/bblanchon/pdfium-binaries\n\
then set PDFIUM_LIB_PATH=/path/to/the/library and rerun.\n"
    )]
    EngineUnavailable(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<pdfium_setup::SetupError> for Pdf2JpgError {
    fn from(e: pdfium_setup::SetupError) -> Self {
        Pdf2JpgError::EngineUnavailable(e.to_string())
    }
}
