//! Pixel depth conversion
//!
//! Conversions between 32 bpp color and 8 bpp intensity images.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Convert an RGB image to 8 bpp luminance.
    ///
    /// Uses the fixed-point weights in [`color::luma`]. The alpha byte
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 32 bpp.
    pub fn convert_rgb_to_luminance(&self) -> Result<Pix> {
        self.convert_rgb_to_gray_with(color::luma)
    }

    /// Convert an RGB image to 8 bpp HSL lightness, `(max + min) / 2`.
    pub fn convert_rgb_to_lightness(&self) -> Result<Pix> {
        self.convert_rgb_to_gray_with(color::lightness)
    }

    /// Convert an RGB image to 8 bpp using an arbitrary reduction.
    pub fn convert_rgb_to_gray_with<F>(&self, reduce: F) -> Result<Pix>
    where
        F: Fn(u8, u8, u8) -> u8,
    {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }

        let (w, h) = self.dimensions();
        let mut result = PixMut::new(w, h, PixelDepth::Bit8)?;
        for y in 0..h {
            let line = self.row_data(y);
            for x in 0..w {
                let (r, g, b) = color::extract_rgb(line[x as usize]);
                result.set_pixel_unchecked(x, y, reduce(r, g, b) as u32);
            }
        }
        Ok(result.into())
    }

    /// Expand an 8 bpp image to opaque 32 bpp gray.
    ///
    /// 32 bpp images are returned unchanged.
    pub fn convert_8_to_32(&self) -> Result<Pix> {
        match self.depth() {
            PixelDepth::Bit32 => Ok(self.clone()),
            PixelDepth::Bit8 => {
                let (w, h) = self.dimensions();
                let mut result = PixMut::new(w, h, PixelDepth::Bit32)?;
                for y in 0..h {
                    for x in 0..w {
                        let v = self.get_pixel_unchecked(x, y) as u8;
                        result.set_pixel_unchecked(x, y, color::compose_rgb(v, v, v));
                    }
                }
                Ok(result.into())
            }
        }
    }
}
