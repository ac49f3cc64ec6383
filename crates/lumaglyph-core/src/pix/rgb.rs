//! RGB component operations
//!
//! Functions for extracting, setting, and composing individual color
//! channels of 32 bpp images.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

/// Color component selector for RGB channel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RgbComponent {
    /// Red channel (bits 24-31)
    Red,
    /// Green channel (bits 16-23)
    Green,
    /// Blue channel (bits 8-15)
    Blue,
    /// Alpha channel (bits 0-7)
    Alpha,
}

impl RgbComponent {
    /// Bit shift of this component within a packed 32-bit pixel.
    #[inline]
    pub fn shift(self) -> u32 {
        match self {
            RgbComponent::Red => color::RED_SHIFT,
            RgbComponent::Green => color::GREEN_SHIFT,
            RgbComponent::Blue => color::BLUE_SHIFT,
            RgbComponent::Alpha => color::ALPHA_SHIFT,
        }
    }

    /// Extract this component from a packed pixel.
    #[inline]
    pub fn extract(self, pixel: u32) -> u8 {
        ((pixel >> self.shift()) & 0xff) as u8
    }
}

impl Pix {
    /// Extract a single color component as an 8 bpp grayscale image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 32 bpp.
    pub fn get_rgb_component(&self, comp: RgbComponent) -> Result<Pix> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }

        let (w, h) = self.dimensions();
        let mut result = PixMut::new(w, h, PixelDepth::Bit8)?;
        for y in 0..h {
            for x in 0..w {
                let val = comp.extract(self.get_pixel_unchecked(x, y));
                result.set_pixel_unchecked(x, y, val as u32);
            }
        }

        Ok(result.into())
    }
}

impl PixMut {
    /// Replace one component of every pixel with the values of an 8 bpp image.
    ///
    /// Setting [`RgbComponent::Alpha`] also marks the image as carrying
    /// alpha (`spp = 4`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for non-32 bpp targets or
    /// non-8 bpp sources, and [`Error::DimensionMismatch`] if sizes differ.
    pub fn set_rgb_component(&mut self, src: &Pix, comp: RgbComponent) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        if src.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(src.depth().bits()));
        }
        if src.dimensions() != (self.width(), self.height()) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: src.dimensions(),
            });
        }

        let shift = comp.shift();
        let mask = !(0xffu32 << shift);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let val = src.get_pixel_unchecked(x, y);
                let pixel = self.get_pixel_unchecked(x, y);
                self.set_pixel_unchecked(x, y, (pixel & mask) | (val << shift));
            }
        }
        if comp == RgbComponent::Alpha {
            self.set_spp(4)?;
        }
        Ok(())
    }
}
