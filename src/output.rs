//! Result types returned by [`crate::convert`] and [`crate::inspect`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The outcome of a successful conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Directory the page files were written into.
    pub output_dir: PathBuf,
    /// One record per written page, in page order.
    pub pages: Vec<PageFile>,
    /// Document metadata read before rendering.
    pub metadata: DocumentMetadata,
    /// Counters and timings for the run.
    pub stats: ConversionStats,
}

/// One JPEG page file written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFile {
    /// 1-indexed page number; also the `<N>` in `page-<N>.jpg`.
    pub page_num: usize,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Rendered bitmap width in pixels.
    pub width: u32,
    /// Rendered bitmap height in pixels.
    pub height: u32,
    /// Encoded JPEG size in bytes.
    pub bytes: u64,
}

/// Counters and phase timings for a conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Pages in the source document.
    pub total_pages: usize,
    /// Pages actually written (the expanded selection).
    pub pages_written: usize,
    /// Sum of encoded JPEG sizes in bytes.
    pub total_bytes: u64,
    /// Milliseconds spent rasterising.
    pub render_duration_ms: u64,
    /// Milliseconds spent JPEG-encoding.
    pub encode_duration_ms: u64,
    /// Milliseconds spent writing files.
    pub write_duration_ms: u64,
    /// Wall-clock milliseconds for the whole run.
    pub total_duration_ms: u64,
}

/// Document-level metadata, extracted without rendering any page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub modification_date: Option<String>,
    /// Total pages in the document.
    pub page_count: usize,
    /// PDF format version, e.g. "Pdf1_7".
    pub pdf_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialise_round_trip() {
        let stats = ConversionStats {
            total_pages: 3,
            pages_written: 3,
            total_bytes: 123_456,
            render_duration_ms: 40,
            encode_duration_ms: 12,
            write_duration_ms: 3,
            total_duration_ms: 60,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: ConversionStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pages_written, 3);
        assert_eq!(back.total_bytes, 123_456);
    }

    #[test]
    fn output_serialises_page_paths() {
        let out = ConversionOutput {
            output_dir: PathBuf::from("pages"),
            pages: vec![PageFile {
                page_num: 1,
                path: PathBuf::from("pages/page-1.jpg"),
                width: 1700,
                height: 2200,
                bytes: 88_000,
            }],
            metadata: DocumentMetadata {
                page_count: 1,
                ..Default::default()
            },
            stats: ConversionStats::default(),
        };
        let json = serde_json::to_string_pretty(&out).unwrap();
        assert!(json.contains("page-1.jpg"));
        assert!(json.contains("\"page_count\": 1"));
    }
}
