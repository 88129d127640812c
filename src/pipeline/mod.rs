//! Pipeline stages for PDF-to-JPEG conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping the
//! stages separate makes each independently testable and lets us swap
//! implementations (e.g. switch rendering backend) without touching the
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ render ──▶ encode ──▶ save
//! (path)   (pdfium)    (JPEG)    (page-N.jpg)
//! ```
//!
//! 1. [`input`]  — validate the user-supplied path (existence, permission,
//!    `%PDF` magic bytes)
//! 2. [`render`] — load the document and rasterise one page at a time via
//!    pdfium at the configured DPI
//! 3. [`encode`] — compress each bitmap to baseline JPEG at the configured
//!    quality
//! 4. [`save`]   — create the output directory and write `page-<N>.jpg`
//!    files
//!
//! The loop in [`crate::convert`] drives one page through stages 2–4 before
//! touching the next, so at most one page bitmap is alive at any time.

pub mod encode;
pub mod input;
pub mod render;
pub mod save;
