//! Conversion entry points.
//!
//! [`convert`] runs the whole pipeline for one document, synchronously and
//! strictly in page order: each page is rendered, encoded and written
//! before the next one is touched, so peak memory is one page bitmap plus
//! its JPEG buffer. The first failure aborts the loop; pages already on
//! disk are left there.

use crate::config::ConversionConfig;
use crate::error::Pdf2JpgError;
use crate::output::{ConversionOutput, ConversionStats, DocumentMetadata, PageFile};
use crate::pipeline::{encode, input, render, save};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a PDF file into sequential JPEG page images.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input` — path to the source PDF
/// * `output_dir` — directory for the `page-<N>.jpg` files; created if
///   absent
/// * `config` — conversion configuration
///
/// # Errors
/// Returns the first error encountered; see [`Pdf2JpgError`] for the
/// taxonomy. When the error occurs mid-loop, files written before it
/// remain on disk.
pub fn convert(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Pdf2JpgError> {
    let total_start = Instant::now();
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();
    info!(
        "Starting conversion: {} → {}/",
        input.display(),
        output_dir.display()
    );

    // ── Step 1: Validate input ───────────────────────────────────────────
    let pdf_path = input::resolve_input(input)?;

    // ── Step 2: Bind the rendering engine ────────────────────────────────
    let pdfium = render::bind_engine()?;

    // ── Step 3: Load document and metadata ───────────────────────────────
    let document = render::load_document(&pdfium, &pdf_path, config.password.as_deref())?;
    let metadata = render::extract_metadata(&document);
    let total_pages = metadata.page_count;
    info!("PDF loaded: {} pages", total_pages);

    // ── Step 4: Expand the page selection ────────────────────────────────
    let page_indices = config.pages.to_indices(total_pages);
    if page_indices.is_empty() {
        return Err(Pdf2JpgError::PageOutOfRange { total: total_pages });
    }
    debug!("Selected {} pages for conversion", page_indices.len());

    // ── Step 5: Ensure the output directory exists ───────────────────────
    save::ensure_output_dir(output_dir)?;

    let selected = page_indices.len();
    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(selected);
    }

    // ── Step 6: Render → encode → save, one page at a time ───────────────
    let mut pages: Vec<PageFile> = Vec::with_capacity(selected);
    let mut render_ms = 0u64;
    let mut encode_ms = 0u64;
    let mut write_ms = 0u64;

    for (seq, &idx) in page_indices.iter().enumerate() {
        let page_num = idx + 1;
        if let Some(ref cb) = config.progress_callback {
            cb.on_page_start(page_num, selected);
        }

        let step = Instant::now();
        let image = render::rasterise_page(&document, idx, config.dpi, config.max_pixel_dimension)?;
        render_ms += step.elapsed().as_millis() as u64;
        let (width, height) = (image.width(), image.height());

        let step = Instant::now();
        let jpeg = encode::encode_jpeg(&image, config.jpeg_quality).map_err(|e| {
            Pdf2JpgError::EncodingFailed {
                page: page_num,
                source: e,
            }
        })?;
        encode_ms += step.elapsed().as_millis() as u64;
        drop(image);

        let step = Instant::now();
        let path = save::write_page(output_dir, page_num, &jpeg)?;
        write_ms += step.elapsed().as_millis() as u64;

        let bytes = jpeg.len() as u64;
        if let Some(ref cb) = config.progress_callback {
            cb.on_page_saved(page_num, selected, &path, bytes);
        }
        info!(
            "Page {}/{} saved: {}",
            seq + 1,
            selected,
            path.display()
        );

        pages.push(PageFile {
            page_num,
            path,
            width,
            height,
            bytes,
        });
    }

    // ── Step 7: Assemble stats ───────────────────────────────────────────
    let stats = ConversionStats {
        total_pages,
        pages_written: pages.len(),
        total_bytes: pages.iter().map(|p| p.bytes).sum(),
        render_duration_ms: render_ms,
        encode_duration_ms: encode_ms,
        write_duration_ms: write_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete: {} pages, {} bytes, {}ms total",
        stats.pages_written, stats.total_bytes, stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(selected, stats.pages_written);
    }

    Ok(ConversionOutput {
        output_dir: output_dir.to_path_buf(),
        pages,
        metadata,
        stats,
    })
}

/// Read document metadata without converting anything.
///
/// Still requires the pdfium engine (it parses the document), but touches
/// neither the output directory nor any page content.
pub fn inspect(
    input: impl AsRef<Path>,
    password: Option<&str>,
) -> Result<DocumentMetadata, Pdf2JpgError> {
    let pdf_path = input::resolve_input(input.as_ref())?;
    let pdfium = render::bind_engine()?;
    let document = render::load_document(&pdfium, &pdf_path, password)?;
    Ok(render::extract_metadata(&document))
}
