//! PDF rasterisation: load a document and render pages to `DynamicImage`
//! via pdfium.
//!
//! PDF page geometry is expressed in points (72 per inch), so the target
//! pixel width of a page is `width_pt / 72 * dpi`. A separate pixel cap
//! bounds the longest edge regardless of DPI, so an outsized page box
//! cannot make pdfium allocate an arbitrarily large bitmap.

use crate::error::Pdf2JpgError;
use crate::output::DocumentMetadata;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::debug;

/// Points per inch in PDF page geometry.
const POINTS_PER_INCH: f32 = 72.0;

/// Bind the native pdfium engine, installing it first if missing.
pub fn bind_engine() -> Result<Pdfium, Pdf2JpgError> {
    pdfium_setup::bind_silent().map_err(Into::into)
}

/// Load a document, mapping pdfium load errors to the password/corrupt
/// variants.
pub fn load_document<'a>(
    pdfium: &'a Pdfium,
    pdf_path: &Path,
    password: Option<&'a str>,
) -> Result<PdfDocument<'a>, Pdf2JpgError> {
    pdfium.load_pdf_from_file(pdf_path, password).map_err(|e| {
        let err_str = format!("{e:?}");
        if err_str.contains("Password") || err_str.contains("password") {
            if password.is_some() {
                Pdf2JpgError::WrongPassword {
                    path: pdf_path.to_path_buf(),
                }
            } else {
                Pdf2JpgError::PasswordRequired {
                    path: pdf_path.to_path_buf(),
                }
            }
        } else {
            Pdf2JpgError::CorruptPdf {
                path: pdf_path.to_path_buf(),
                detail: err_str,
            }
        }
    })
}

/// Pixel dimensions for a page of `width_pt` x `height_pt` points rendered
/// at `dpi`, with the longest edge capped at `max_pixel_dimension`.
fn scaled_dimensions(
    width_pt: f32,
    height_pt: f32,
    dpi: u32,
    max_pixel_dimension: u32,
) -> (i32, i32) {
    let scale = dpi as f32 / POINTS_PER_INCH;
    let mut width = width_pt * scale;
    let mut height = height_pt * scale;

    let cap = max_pixel_dimension as f32;
    let longest = width.max(height);
    if longest > cap {
        let shrink = cap / longest;
        width *= shrink;
        height *= shrink;
    }

    (
        width.round().max(1.0) as i32,
        height.ceil().max(1.0) as i32,
    )
}

/// Rasterise one page (0-indexed) to a bitmap at `dpi`, capping the longest
/// edge at `max_pixel_dimension`.
pub fn rasterise_page(
    document: &PdfDocument<'_>,
    index: usize,
    dpi: u32,
    max_pixel_dimension: u32,
) -> Result<DynamicImage, Pdf2JpgError> {
    let page_num = index + 1;

    let page = document
        .pages()
        .get(index as u16)
        .map_err(|e| Pdf2JpgError::RasterisationFailed {
            page: page_num,
            detail: format!("{e:?}"),
        })?;

    let (width, height) = scaled_dimensions(
        page.width().value,
        page.height().value,
        dpi,
        max_pixel_dimension,
    );

    let render_config = PdfRenderConfig::new()
        .set_target_width(width)
        .set_maximum_height(height);

    let bitmap =
        page.render_with_config(&render_config)
            .map_err(|e| Pdf2JpgError::RasterisationFailed {
                page: page_num,
                detail: format!("{e:?}"),
            })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered page {} → {}x{} px",
        page_num,
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Read document metadata without rendering any page.
pub fn extract_metadata(document: &PdfDocument<'_>) -> DocumentMetadata {
    let metadata = document.metadata();

    let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
        metadata.get(tag).and_then(|t| {
            let v = t.value().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        })
    };

    DocumentMetadata {
        title: get_meta(PdfDocumentMetadataTagType::Title),
        author: get_meta(PdfDocumentMetadataTagType::Author),
        subject: get_meta(PdfDocumentMetadataTagType::Subject),
        creator: get_meta(PdfDocumentMetadataTagType::Creator),
        producer: get_meta(PdfDocumentMetadataTagType::Producer),
        creation_date: get_meta(PdfDocumentMetadataTagType::CreationDate),
        modification_date: get_meta(PdfDocumentMetadataTagType::ModificationDate),
        page_count: document.pages().len() as usize,
        pdf_version: format!("{:?}", document.version()),
    }
}

#[cfg(test)]
mod tests {
    use super::scaled_dimensions;

    #[test]
    fn a4_at_200_dpi() {
        // A4 is 595 x 842 points.
        let (w, h) = scaled_dimensions(595.0, 842.0, 200, 10_000);
        assert_eq!(w, 1653);
        assert_eq!(h, 2339);
    }

    #[test]
    fn identity_at_72_dpi() {
        let (w, h) = scaled_dimensions(612.0, 792.0, 72, 10_000);
        assert_eq!(w, 612);
        assert_eq!(h, 792);
    }

    #[test]
    fn cap_preserves_aspect_ratio() {
        // A0 poster at 200 DPI exceeds a 2,000 px cap.
        let (w, h) = scaled_dimensions(2384.0, 3370.0, 200, 2000);
        assert!(h <= 2000);
        let src_ratio = 2384.0 / 3370.0;
        let out_ratio = w as f32 / h as f32;
        assert!((src_ratio - out_ratio).abs() < 0.01);
    }

    #[test]
    fn degenerate_page_still_has_positive_dims() {
        let (w, h) = scaled_dimensions(0.1, 0.1, 72, 10_000);
        assert!(w >= 1);
        assert!(h >= 1);
    }
}
