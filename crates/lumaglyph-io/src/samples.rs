//! Interleaved 8-bit samples to `Pix`
//!
//! Every decoder hands its output to [`pix_from_samples`], so the rest of
//! the pipeline always receives a 32 bpp image. Layouts with an alpha
//! sample produce `spp = 4`; all others are opaque with `spp = 3`.

use crate::{IoError, IoResult};
use lumaglyph_core::{Pix, PixMut, PixelDepth, color};

/// Interleaved sample layout of a decoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLayout {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl SampleLayout {
    /// Number of bytes per pixel.
    pub fn samples(self) -> usize {
        match self {
            SampleLayout::Gray => 1,
            SampleLayout::GrayAlpha => 2,
            SampleLayout::Rgb => 3,
            SampleLayout::Rgba => 4,
        }
    }

    /// Whether the layout carries an alpha sample.
    pub fn has_alpha(self) -> bool {
        matches!(self, SampleLayout::GrayAlpha | SampleLayout::Rgba)
    }
}

/// Build a 32 bpp image from tightly packed rows of 8-bit samples.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if `data` is shorter than
/// `width * height * samples`, and [`IoError::Core`] for zero dimensions.
pub fn pix_from_samples(
    width: u32,
    height: u32,
    layout: SampleLayout,
    data: &[u8],
) -> IoResult<Pix> {
    let mut pix = PixMut::new(width, height, PixelDepth::Bit32)?;
    let n = layout.samples();
    let needed = width as usize * height as usize * n;
    if data.len() < needed {
        return Err(IoError::InvalidData(format!(
            "expected {} sample bytes, got {}",
            needed,
            data.len()
        )));
    }

    for (y, row) in data[..needed].chunks_exact(width as usize * n).enumerate() {
        for (x, px) in row.chunks_exact(n).enumerate() {
            let pixel = match layout {
                SampleLayout::Gray => color::compose_rgb(px[0], px[0], px[0]),
                SampleLayout::GrayAlpha => color::compose_rgba(px[0], px[0], px[0], px[1]),
                SampleLayout::Rgb => color::compose_rgb(px[0], px[1], px[2]),
                SampleLayout::Rgba => color::compose_rgba(px[0], px[1], px[2], px[3]),
            };
            pix.set_pixel_unchecked(x as u32, y as u32, pixel);
        }
    }
    if layout.has_alpha() {
        pix.set_spp(4)?;
    }

    Ok(pix.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_expands_to_rgb() {
        let pix = pix_from_samples(2, 1, SampleLayout::Gray, &[7, 200]).unwrap();
        assert_eq!(pix.get_rgba(1, 0), Some((200, 200, 200, 255)));
        assert!(!pix.has_alpha());
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let pix = pix_from_samples(1, 1, SampleLayout::Rgba, &[1, 2, 3, 4]).unwrap();
        assert!(pix.has_alpha());
        assert_eq!(pix.get_rgba(0, 0), Some((1, 2, 3, 4)));
    }

    #[test]
    fn test_short_buffer_rejected() {
        assert!(matches!(
            pix_from_samples(2, 2, SampleLayout::Rgb, &[0; 11]),
            Err(IoError::InvalidData(_))
        ));
    }
}
