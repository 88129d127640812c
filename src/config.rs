//! Configuration types for PDF-to-JPEG conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`],
//! built via its [`ConversionConfigBuilder`]. The defaults match the
//! classic one-shot use of this tool: 200 DPI, quality-85 JPEG, all pages.

use crate::error::Pdf2JpgError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for a PDF-to-JPEG conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2jpg::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .dpi(300)
///     .jpeg_quality(90)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Rendering DPI used when rasterising each PDF page. Range: 72–600. Default: 200.
    ///
    /// 200 DPI keeps body text legible when the images are viewed at full
    /// width while staying around 1,700 px wide for an A4 page. Raise to
    /// 300 for print-quality output; drop to 96 when file size dominates.
    pub dpi: u32,

    /// JPEG quality, 1–100. Default: 85.
    ///
    /// 85 is the usual size/fidelity trade-off for rendered pages; visible
    /// artefacts only start to appear below roughly 75.
    pub jpeg_quality: u8,

    /// Maximum rendered dimension (width or height) in pixels. Default: 10_000.
    ///
    /// A safety cap independent of DPI. A 200-DPI render of an A0 poster
    /// would be around 9,400 px on the long edge; anything past the cap is
    /// scaled down proportionally so pdfium never allocates an unbounded
    /// bitmap for a pathological page box.
    pub max_pixel_dimension: u32,

    /// Page selection. Default: all pages.
    pub pages: PageSelection,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Observer for per-page progress events. Default: none.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dpi: 200,
            jpeg_quality: 85,
            max_pixel_dimension: 10_000,
            pages: PageSelection::default(),
            password: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("dpi", &self.dpi)
            .field("jpeg_quality", &self.jpeg_quality)
            .field("max_pixel_dimension", &self.max_pixel_dimension)
            .field("pages", &self.pages)
            .field("password", &self.password.as_ref().map(|_| "<set>"))
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(72, 600);
        self
    }

    pub fn jpeg_quality(mut self, q: u8) -> Self {
        self.config.jpeg_quality = q.clamp(1, 100);
        self
    }

    pub fn max_pixel_dimension(mut self, px: u32) -> Self {
        self.config.max_pixel_dimension = px.max(100);
        self
    }

    pub fn pages(mut self, selection: PageSelection) -> Self {
        self.config.pages = selection;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2JpgError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 600 {
            return Err(Pdf2JpgError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        if c.jpeg_quality == 0 || c.jpeg_quality > 100 {
            return Err(Pdf2JpgError::InvalidConfig(format!(
                "JPEG quality must be 1–100, got {}",
                c.jpeg_quality
            )));
        }
        if let PageSelection::Range(start, end) = c.pages {
            if start == 0 || start > end {
                return Err(Pdf2JpgError::InvalidConfig(format!(
                    "Invalid page range {start}-{end}: pages are 1-indexed and start must be <= end"
                )));
            }
        }
        Ok(self.config)
    }
}

// ── Page selection ───────────────────────────────────────────────────────

/// Specifies which pages of the PDF to convert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum PageSelection {
    /// Convert all pages (default).
    #[default]
    All,
    /// Convert a single page (1-indexed).
    Single(usize),
    /// Convert a contiguous range of pages (1-indexed, inclusive).
    Range(usize, usize),
    /// Convert specific pages (1-indexed, deduplicated).
    Set(Vec<usize>),
}

impl PageSelection {
    /// Expand the selection into a sorted, deduplicated list of 0-indexed
    /// page numbers. Selections entirely outside the document come back
    /// empty; `convert` turns that into a `PageOutOfRange` error.
    pub fn to_indices(&self, total_pages: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = match self {
            PageSelection::All => (0..total_pages).collect(),
            PageSelection::Single(p) => {
                if *p >= 1 && *p <= total_pages {
                    vec![p - 1]
                } else {
                    vec![]
                }
            }
            PageSelection::Range(start, end) => {
                let s = (*start).max(1) - 1;
                let e = (*end).min(total_pages);
                (s..e).collect()
            }
            PageSelection::Set(pages) => pages
                .iter()
                .filter(|&&p| p >= 1 && p <= total_pages)
                .map(|p| p - 1)
                .collect(),
        };
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = ConversionConfig::default();
        assert_eq!(c.dpi, 200);
        assert_eq!(c.jpeg_quality, 85);
        assert!(matches!(c.pages, PageSelection::All));
    }

    #[test]
    fn builder_clamps_out_of_range_values() {
        let c = ConversionConfig::builder()
            .dpi(10)
            .jpeg_quality(150)
            .max_pixel_dimension(1)
            .build()
            .unwrap();
        assert_eq!(c.dpi, 72);
        assert_eq!(c.jpeg_quality, 100);
        assert_eq!(c.max_pixel_dimension, 100);
    }

    #[test]
    fn build_rejects_inverted_range() {
        let err = ConversionConfig::builder()
            .pages(PageSelection::Range(5, 2))
            .build()
            .unwrap_err();
        assert!(matches!(err, Pdf2JpgError::InvalidConfig(_)));
    }

    #[test]
    fn page_selection_to_indices() {
        assert_eq!(PageSelection::All.to_indices(5), vec![0, 1, 2, 3, 4]);
        assert_eq!(PageSelection::Single(3).to_indices(5), vec![2]);
        assert_eq!(PageSelection::Single(6).to_indices(5), Vec::<usize>::new());
        assert_eq!(PageSelection::Range(2, 4).to_indices(5), vec![1, 2, 3]);
        assert_eq!(
            PageSelection::Set(vec![1, 3, 5]).to_indices(5),
            vec![0, 2, 4]
        );
        assert_eq!(
            PageSelection::Set(vec![3, 1, 3]).to_indices(5),
            vec![0, 2] // deduplicated and sorted
        );
    }

    #[test]
    fn page_selection_empty_document() {
        assert_eq!(PageSelection::All.to_indices(0), Vec::<usize>::new());
        assert_eq!(PageSelection::Range(1, 9).to_indices(0), Vec::<usize>::new());
    }
}
