//! Image encoding: `DynamicImage` → baseline JPEG bytes.
//!
//! pdfium hands back RGBA bitmaps; JPEG carries no alpha channel, so pages
//! are flattened to RGB before encoding. Quality is the caller's knob
//! (1–100); everything else about the bitstream, including Huffman table
//! choices, is left to the encoder.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::io::Cursor;
use tracing::debug;

/// Encode a rasterised page as a JPEG at the given quality.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, image::ImageError> {
    let rgb = img.to_rgb8();

    let mut buf = Vec::new();
    let mut cursor = Cursor::new(&mut buf);
    let mut encoder = JpegEncoder::new_with_quality(&mut cursor, quality);
    encoder.encode_image(&rgb)?;

    debug!(
        "Encoded {}x{} page → {} bytes JPEG (q={})",
        rgb.width(),
        rgb.height(),
        buf.len(),
        quality
    );

    Ok(buf)
}
