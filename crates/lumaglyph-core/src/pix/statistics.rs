//! Image statistics operations
//!
//! Mean values over whole images or over alpha-selected pixels.

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Mean RGB over pixels whose alpha is strictly greater than `min_alpha`.
    ///
    /// Returns `None` if no pixel qualifies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 32 bpp.
    pub fn mean_rgb_where_alpha_above(&self, min_alpha: u8) -> Result<Option<(f64, f64, f64)>> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }

        let mut sums = [0u64; 3];
        let mut count = 0u64;
        for y in 0..self.height() {
            for &pixel in self.row_data(y) {
                let (r, g, b, a) = color::extract_rgba(pixel);
                if a > min_alpha {
                    sums[0] += r as u64;
                    sums[1] += g as u64;
                    sums[2] += b as u64;
                    count += 1;
                }
            }
        }

        if count == 0 {
            return Ok(None);
        }
        let n = count as f64;
        Ok(Some((
            sums[0] as f64 / n,
            sums[1] as f64 / n,
            sums[2] as f64 / n,
        )))
    }

    /// Mean value of an 8 bpp image.
    pub fn mean_gray(&self) -> Result<f64> {
        let hist = self.gray_histogram()?;
        let total: u64 = hist.iter().map(|&c| c as u64).sum();
        let weighted: u64 = hist
            .iter()
            .enumerate()
            .map(|(v, &c)| v as u64 * c as u64)
            .sum();
        Ok(weighted as f64 / total as f64)
    }
}
