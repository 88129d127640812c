//! # pdf2jpg
//!
//! Rasterise the pages of a PDF document into sequential JPEG images.
//!
//! Given `document.pdf` with N pages, a conversion produces
//! `page-1.jpg` … `page-N.jpg` in the output directory, rendered at a
//! configurable DPI (default 200) and JPEG quality (default 85). Rendering
//! is delegated to the native [PDFium](https://pdfium.googlesource.com/pdfium/)
//! library, which is downloaded and cached automatically on first use by
//! the `pdfium-setup` crate.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input   validate path and %PDF magic bytes
//!  ├─ 2. Engine  bind pdfium (auto-installed on first run)
//!  ├─ 3. Render  rasterise each selected page at the target DPI
//!  ├─ 4. Encode  compress the bitmap to baseline JPEG
//!  └─ 5. Save    write page-<N>.jpg, report progress
//! ```
//!
//! Pages are processed strictly one at a time; the loop holds a single
//! page bitmap at its peak and drops it before rendering the next page.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2jpg::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let output = convert("document.pdf", "pages", &config)?;
//!     println!(
//!         "{} pages written to {}",
//!         output.stats.pages_written,
//!         output.output_dir.display()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2jpg` binary (clap + anyhow + indicatif + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! pdf2jpg = { version = "0.2", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, PageSelection};
pub use convert::{convert, inspect};
pub use error::Pdf2JpgError;
pub use output::{ConversionOutput, ConversionStats, DocumentMetadata, PageFile};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
