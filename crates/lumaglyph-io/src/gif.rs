//! GIF image format support
//!
//! Reads the first frame of a GIF. Frames are decoded to RGBA so that the
//! transparent color index becomes real alpha.

use crate::samples::{SampleLayout, pix_from_samples};
use crate::{IoError, IoResult};
use gif::{ColorOutput, DecodeOptions};
use lumaglyph_core::Pix;
use log::debug;
use std::io::Read;

/// Read a GIF image
///
/// Only the first frame is decoded; later frames of an animation are
/// ignored. Images with a transparent color index get `spp = 4`.
pub fn read_gif<R: Read>(reader: R) -> IoResult<Pix> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    let frame = decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?;

    let width = frame.width as u32;
    let height = frame.height as u32;
    let layout = if frame.transparent.is_some() {
        SampleLayout::Rgba
    } else {
        SampleLayout::Rgb
    };
    debug!("GIF first frame {}x{} ({:?})", width, height, layout);

    if layout == SampleLayout::Rgba {
        pix_from_samples(width, height, layout, &frame.buffer)
    } else {
        let rgb: Vec<u8> = frame
            .buffer
            .chunks_exact(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect();
        pix_from_samples(width, height, layout, &rgb)
    }
}
