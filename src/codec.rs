//! # Codec Adapter
//!
//! Encode/decode between [`RgbImage`] buffers and transport bytes.
//!
//! Output toward callers is always PNG. JPEG only appears internally, as the
//! deliberately lossy round-trip behind the `jpegify` effect.

use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, ImageFormat, RgbImage};
use std::io::Cursor;

/// Encode a buffer as PNG bytes for transport.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Decode caller-supplied bytes (any supported format) into an RGB buffer.
pub fn decode(bytes: &[u8]) -> Result<RgbImage, ImageError> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Push a buffer through JPEG at the given quality and decode it back,
/// reintroducing compression artifacts on purpose.
pub fn jpeg_roundtrip(img: &RgbImage, quality: u8) -> Result<RgbImage, ImageError> {
    let mut jpeg_bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, quality);
    img.write_with_encoder(encoder)?;
    Ok(image::load_from_memory(&jpeg_bytes)?.to_rgb8())
}
