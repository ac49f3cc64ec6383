//! Histogram generation
//!
//! 256-bin value counts for 8 bpp images and per-channel counts for
//! 32 bpp images.

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

/// Count of pixels per 8-bit value.
pub type Histogram = [u32; 256];

impl Pix {
    /// Compute the gray-value histogram of an 8 bpp image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 8 bpp.
    pub fn gray_histogram(&self) -> Result<Histogram> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let mut hist = [0u32; 256];
        for y in 0..self.height() {
            for x in 0..self.width() {
                hist[self.get_pixel_unchecked(x, y) as usize] += 1;
            }
        }
        Ok(hist)
    }

    /// Compute one histogram per color channel of a 32 bpp image.
    ///
    /// Returns `[red, green, blue]`.
    pub fn rgb_histograms(&self) -> Result<[Histogram; 3]> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let mut hists = [[0u32; 256]; 3];
        for y in 0..self.height() {
            for &pixel in &self.row_data(y)[..self.width() as usize] {
                let (r, g, b) = color::extract_rgb(pixel);
                hists[0][r as usize] += 1;
                hists[1][g as usize] += 1;
                hists[2][b as usize] += 1;
            }
        }
        Ok(hists)
    }
}
