//! Progress-callback trait for per-page conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! an event as each page file is written. The CLI uses this to drive its
//! progress bar; library embedders can forward events to whatever channel
//! suits the host application.
//!
//! The conversion loop is sequential, so events for one run always arrive
//! in page order from a single thread. The trait is still `Send + Sync`
//! because configs (and the callbacks inside them) are routinely shared
//! across threads by embedders.

use std::path::Path;
use std::sync::Arc;

/// Called by the conversion pipeline as it writes each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after the document is opened, before any page is rendered.
    ///
    /// `total_pages` is the number of pages that will be converted (the
    /// expanded page selection, not necessarily the whole document).
    fn on_conversion_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called just before a page is rasterised.
    ///
    /// `page_num` is 1-indexed.
    fn on_page_start(&self, page_num: usize, total_pages: usize) {
        let _ = (page_num, total_pages);
    }

    /// Called when a page file has been written to disk.
    ///
    /// `path` is the file just written, `bytes` its encoded size.
    fn on_page_saved(&self, page_num: usize, total_pages: usize, path: &Path, bytes: u64) {
        let _ = (page_num, total_pages, path, bytes);
    }

    /// Called once after the last page has been written.
    ///
    /// Not called when the run aborts on an error.
    fn on_conversion_complete(&self, total_pages: usize, pages_written: usize) {
        let _ = (total_pages, pages_written);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;
