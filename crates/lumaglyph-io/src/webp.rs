//! WebP image format support
//!
//! Reads lossy and lossless WebP images. Animated files yield their
//! first frame.

use crate::samples::{SampleLayout, pix_from_samples};
use crate::{IoError, IoResult};
use image_webp::WebPDecoder;
use lumaglyph_core::Pix;
use std::io::{BufRead, Seek};

/// Read a WebP image
///
/// The resulting Pix is 32bpp with:
/// - spp=4 if the image has an alpha channel
/// - spp=3 if the image has no alpha channel
pub fn read_webp<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = WebPDecoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("WebP decode error: {}", e)))?;

    let (width, height) = decoder.dimensions();
    let layout = if decoder.has_alpha() {
        SampleLayout::Rgba
    } else {
        SampleLayout::Rgb
    };

    let buffer_size = decoder.output_buffer_size().ok_or_else(|| {
        IoError::DecodeError("failed to determine output buffer size".to_string())
    })?;
    let mut buffer = vec![0u8; buffer_size];
    decoder
        .read_image(&mut buffer)
        .map_err(|e| IoError::DecodeError(format!("WebP read error: {}", e)))?;

    pix_from_samples(width, height, layout, &buffer)
}
