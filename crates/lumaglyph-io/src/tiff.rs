//! TIFF image format support
//!
//! Reads the first page of a TIFF file. 8 and 16 bit gray, gray+alpha,
//! RGB and RGBA images are supported; 16-bit samples keep their high byte.

use crate::samples::{SampleLayout, pix_from_samples};
use crate::{IoError, IoResult};
use lumaglyph_core::Pix;
use std::io::{Read, Seek};
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};

/// Read the first page of a TIFF image
pub fn read_tiff<R: Read + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("TIFF decode error: {}", e)))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("Failed to read TIFF dimensions: {}", e)))?;
    let color_type = decoder
        .colortype()
        .map_err(|e| IoError::DecodeError(format!("Failed to read TIFF color type: {}", e)))?;

    let layout = match color_type {
        ColorType::Gray(8 | 16) => SampleLayout::Gray,
        ColorType::GrayA(8 | 16) => SampleLayout::GrayAlpha,
        ColorType::RGB(8 | 16) => SampleLayout::Rgb,
        ColorType::RGBA(8 | 16) => SampleLayout::Rgba,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported TIFF color type: {:?}",
                color_type
            )));
        }
    };

    let image_data = decoder
        .read_image()
        .map_err(|e| IoError::DecodeError(format!("Failed to read TIFF image data: {}", e)))?;

    let samples: Vec<u8> = match image_data {
        DecodingResult::U8(data) => data,
        DecodingResult::U16(data) => data.iter().map(|&v| (v >> 8) as u8).collect(),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported TIFF sample type: {}",
                sample_type_name(&other)
            )));
        }
    };

    pix_from_samples(width, height, layout, &samples)
}

fn sample_type_name(result: &DecodingResult) -> &'static str {
    match result {
        DecodingResult::U8(_) => "u8",
        DecodingResult::U16(_) => "u16",
        DecodingResult::U32(_) => "u32",
        DecodingResult::U64(_) => "u64",
        DecodingResult::F32(_) => "f32",
        DecodingResult::F64(_) => "f64",
        _ => "signed or half-float",
    }
}
