//! Intensity to glyph quantization

use crate::palette::Palette;
use lumaglyph_core::FPix;

/// Palette index for an intensity in `[0, 255]`.
///
/// `floor(intensity * len / 256)`, clipped to `[0, len - 1]`.
#[inline]
pub fn glyph_index(intensity: f32, len: usize) -> usize {
    let i = (intensity as f64 * len as f64 / 256.0).floor();
    if i <= 0.0 {
        0
    } else {
        (i as usize).min(len - 1)
    }
}

/// Map every intensity to a glyph, row-major.
pub fn map_intensities(intensities: &FPix, palette: &Palette) -> Vec<char> {
    intensities
        .data()
        .iter()
        .map(|&v| palette.glyph(glyph_index(v, palette.len())))
        .collect()
}
