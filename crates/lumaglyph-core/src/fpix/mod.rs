//! FPix - Floating-point image
//!
//! `FPix` is a 2D array of `f32` values, used for intensities that must
//! keep fractional precision between pipeline stages (for example the
//! output of histogram equalization).
//!
//! # Examples
//!
//! ```
//! use lumaglyph_core::FPix;
//!
//! let mut fpix = FPix::new(100, 100).unwrap();
//! fpix.set_pixel(10, 20, 0.5).unwrap();
//! assert_eq!(fpix.get_pixel(10, 20).unwrap(), 0.5);
//! ```

use crate::color;
use crate::error::{Error, Result};
use crate::pix::{Pix, PixelDepth};

/// Floating-point image
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FPix {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl FPix {
    /// Create a new FPix with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new FPix with all pixels set to the specified value
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(FPix {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a FPix from raw data in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }
        Ok(FPix {
            width,
            height,
            data,
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel value
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f32> {
        self.check_bounds(x, y)?;
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Set a pixel value
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        self.check_bounds(x, y)?;
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Get a pixel value without bounds checking
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set a pixel value without bounds checking
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: f32) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width as usize,
            });
        }
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            });
        }
        Ok(())
    }

    /// Get raw access to the pixel data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable access to the pixel data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get one row of pixel values
    pub fn row(&self, y: u32) -> &[f32] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Create a FPix from a Pix
    ///
    /// 8 bpp values convert directly; 32 bpp pixels convert to luma.
    pub fn from_pix(pix: &Pix) -> Result<Self> {
        let (width, height) = pix.dimensions();
        let mut fpix = FPix::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let pixel = pix.get_pixel_unchecked(x, y);
                let val = match pix.depth() {
                    PixelDepth::Bit8 => pixel as f32,
                    PixelDepth::Bit32 => {
                        let (r, g, b) = color::extract_rgb(pixel);
                        color::luma(r, g, b) as f32
                    }
                };
                fpix.set_pixel_unchecked(x, y, val);
            }
        }
        Ok(fpix)
    }
}
