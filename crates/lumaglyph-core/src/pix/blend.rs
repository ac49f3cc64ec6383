//! Image blending operations
//!
//! Alpha compositing of a 32 bpp RGBA image over a solid fill color.

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Composite this image over an opaque fill color.
    ///
    /// Each channel becomes `src * a + fill * (1 - a)` with `a` the
    /// normalized alpha byte, rounded to the nearest integer. The result
    /// is opaque (`spp = 3`, alpha bytes 255).
    ///
    /// # Arguments
    ///
    /// * `fill` - Background color as `(r, g, b)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 32 bpp.
    pub fn blend_over_color(&self, fill: (u8, u8, u8)) -> Result<Pix> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }

        let mut result = self.create_template();
        result.set_spp(3)?;
        for y in 0..self.height() {
            let src = self.row_data(y);
            let dst = result.row_data_mut(y);
            for (d, &s) in dst.iter_mut().zip(src) {
                let (r, g, b, a) = color::extract_rgba(s);
                *d = color::compose_rgb(
                    blend_channel(r, fill.0, a),
                    blend_channel(g, fill.1, a),
                    blend_channel(b, fill.2, a),
                );
            }
        }
        Ok(result.into())
    }
}

/// Blend one channel: `(src * a + dst * (255 - a)) / 255`, rounded.
#[inline]
pub fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    let sum = src as u32 * a + dst as u32 * (255 - a);
    ((sum + 127) / 255) as u8
}
