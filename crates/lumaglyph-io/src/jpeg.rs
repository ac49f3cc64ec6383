//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale, RGB and
//! CMYK sources all decode to an opaque 32 bpp image.

use crate::samples::{SampleLayout, pix_from_samples};
use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use lumaglyph_core::Pix;
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    match info.pixel_format {
        PixelFormat::L8 => pix_from_samples(width, height, SampleLayout::Gray, &data),
        PixelFormat::L16 => {
            // Big-endian samples; keep the high byte.
            let gray: Vec<u8> = data.chunks_exact(2).map(|s| s[0]).collect();
            pix_from_samples(width, height, SampleLayout::Gray, &gray)
        }
        PixelFormat::RGB24 => pix_from_samples(width, height, SampleLayout::Rgb, &data),
        PixelFormat::CMYK32 => {
            let rgb: Vec<u8> = data
                .chunks_exact(4)
                .flat_map(|p| {
                    let k = 255 - p[3] as u32;
                    [p[0], p[1], p[2]].map(|c| ((255 - c as u32) * k / 255) as u8)
                })
                .collect();
            pix_from_samples(width, height, SampleLayout::Rgb, &rgb)
        }
    }
}
