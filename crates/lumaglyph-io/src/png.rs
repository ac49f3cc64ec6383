//! PNG image format support

use crate::samples::{SampleLayout, pix_from_samples};
use crate::{IoError, IoResult};
use lumaglyph_core::{Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palette and low bit-depth images are expanded and 16-bit samples are
/// stripped to 8 bits, so the result is always 32 bpp.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let layout = match output_info.color_type {
        ColorType::Grayscale => SampleLayout::Gray,
        ColorType::GrayscaleAlpha => SampleLayout::GrayAlpha,
        ColorType::Rgb => SampleLayout::Rgb,
        ColorType::Rgba => SampleLayout::Rgba,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth after expansion: {:?}",
            output_info.bit_depth
        )));
    }

    // Rows are contiguous at 8 bits per sample.
    let width = output_info.width;
    let height = output_info.height;
    pix_from_samples(width, height, layout, &buf[..output_info.buffer_size()])
}

/// Write a PNG image
///
/// 8 bpp images are written as grayscale; 32 bpp images as RGBA when they
/// carry alpha and RGB otherwise.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let color_type = match pix.depth() {
        PixelDepth::Bit8 => ColorType::Grayscale,
        PixelDepth::Bit32 if pix.has_alpha() => ColorType::Rgba,
        PixelDepth::Bit32 => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::Rgb => 3,
        _ => 4,
    };
    let mut data = Vec::with_capacity(width as usize * height as usize * samples);
    for y in 0..height {
        for x in 0..width {
            let pixel = pix.get_pixel_unchecked(x, y);
            match color_type {
                ColorType::Grayscale => data.push(pixel as u8),
                ColorType::Rgb => {
                    let (r, g, b) = color::extract_rgb(pixel);
                    data.extend_from_slice(&[r, g, b]);
                }
                _ => {
                    let (r, g, b, a) = color::extract_rgba(pixel);
                    data.extend_from_slice(&[r, g, b, a]);
                }
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
