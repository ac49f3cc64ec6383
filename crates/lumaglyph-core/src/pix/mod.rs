//! PIX - The main image container
//!
//! The `Pix` structure is the image type passed between pipeline stages.
//! It holds either 8 bpp intensities or 32 bpp RGBA pixels.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//! - For 32-bit images, color order is RGBA (red in MSB)
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` so that read-only views are cheap to share.
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`],
//! [`Pix::into_mut`] or [`Pix::to_mut`], then convert back with `Into<Pix>`.
//! A stage that owns its input can call [`Pix::into_mut`] and edit in
//! place without copying when no other handle exists.

mod access;
pub mod blend;
pub mod convert;
mod histogram;
mod rgb;
pub mod statistics;

pub use access::*;
pub use histogram::Histogram;
pub use rgb::RgbComponent;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel depth (bits per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 8-bit intensity
    Bit8 = 8,
    /// 32-bit RGB or RGBA
    Bit32 = 32,
}

impl PixelDepth {
    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }
}

/// Internal PIX data
#[derive(Debug, Clone)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Depth in bits per pixel
    depth: PixelDepth,
    /// Samples per pixel (1 for intensity, 3 for RGB, 4 for RGBA)
    spp: u32,
    /// 32-bit words per line
    wpl: u32,
    /// The image data (packed 32-bit words)
    data: Vec<u32>,
}

impl PixData {
    fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = compute_wpl(width, depth);
        let spp = match depth {
            PixelDepth::Bit32 => 3,
            PixelDepth::Bit8 => 1,
        };
        Ok(PixData {
            width,
            height,
            depth,
            spp,
            wpl,
            data: vec![0u32; wpl as usize * height as usize],
        })
    }
}

/// Compute words per line for given width and depth.
#[inline]
fn compute_wpl(width: u32, depth: PixelDepth) -> u32 {
    let bits_per_line = u64::from(width) * u64::from(depth.bits());
    bits_per_line.div_ceil(32) as u32
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use lumaglyph_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(640, 480, PixelDepth::Bit32).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// assert!(!pix.has_alpha());
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions and depth.
    ///
    /// The image data is initialized to zero. 32 bpp images start with
    /// `spp = 3`, meaning the alpha byte carries no information.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, depth)?),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Check whether the alpha byte of a 32 bpp image is meaningful.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.depth == PixelDepth::Bit32 && self.inner.spp == 4
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get a slice over one row of packed words.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &self.inner.data[start..end]
    }

    /// Check if two PIX have the same width, height, and depth.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.depth == other.inner.depth
    }

    /// Create a new zeroed PIX with the same dimensions, depth and spp.
    pub fn create_template(&self) -> PixMut {
        PixMut {
            inner: PixData {
                data: vec![0u32; self.inner.data.len()],
                ..(*self.inner).clone_header()
            },
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Take mutable ownership, copying only if the data is shared.
    pub fn into_mut(self) -> PixMut {
        self.try_into_mut().unwrap_or_else(|pix| pix.to_mut())
    }

    /// Create a mutable copy of this PIX.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }
}

impl PixData {
    /// Copy every field except the pixel words.
    fn clone_header(&self) -> PixData {
        PixData {
            width: self.width,
            height: self.height,
            depth: self.depth,
            spp: self.spp,
            wpl: self.wpl,
            data: Vec::new(),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create a new zeroed mutable image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        Ok(PixMut {
            inner: PixData::new(width, height, depth)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Get words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Set samples per pixel.
    ///
    /// Only 32 bpp images may carry 3 or 4 samples; 8 bpp images always
    /// have one.
    pub fn set_spp(&mut self, spp: u32) -> Result<()> {
        let valid = match self.inner.depth {
            PixelDepth::Bit8 => spp == 1,
            PixelDepth::Bit32 => spp == 3 || spp == 4,
        };
        if !valid {
            return Err(Error::InvalidParameter(format!(
                "spp {} not valid for {} bpp",
                spp,
                self.inner.depth.bits()
            )));
        }
        self.inner.spp = spp;
        Ok(())
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &mut self.inner.data[start..end]
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            Pix::new(0, 10, PixelDepth::Bit8),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
        assert!(PixMut::new(10, 0, PixelDepth::Bit32).is_err());
    }

    #[test]
    fn test_wpl() {
        let pix = Pix::new(5, 2, PixelDepth::Bit8).unwrap();
        assert_eq!(pix.wpl(), 2);
        let pix = Pix::new(5, 2, PixelDepth::Bit32).unwrap();
        assert_eq!(pix.wpl(), 5);
        assert_eq!(pix.data().len(), 10);
    }

    #[test]
    fn test_into_mut_without_copy_when_unique() {
        let pix = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
        assert!(pix.try_into_mut().is_ok());
    }

    #[test]
    fn test_into_mut_copies_when_shared() {
        let pix = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
        let shared = pix.clone();
        let mut owned = pix.into_mut();
        owned.set_pixel_unchecked(0, 0, 0xffff_ffff);
        assert_eq!(shared.get_pixel_unchecked(0, 0), 0);
    }

    #[test]
    fn test_set_spp_validation() {
        let mut pm = PixMut::new(2, 2, PixelDepth::Bit32).unwrap();
        assert!(pm.set_spp(4).is_ok());
        assert!(pm.set_spp(1).is_err());
        let mut pm8 = PixMut::new(2, 2, PixelDepth::Bit8).unwrap();
        assert!(pm8.set_spp(3).is_err());
    }

    #[test]
    fn test_create_template_keeps_spp() {
        let mut pm = PixMut::new(3, 3, PixelDepth::Bit32).unwrap();
        pm.set_spp(4).unwrap();
        pm.set_pixel_unchecked(1, 1, 0x1234_5678);
        let pix: Pix = pm.into();
        let tmpl: Pix = pix.create_template().into();
        assert!(tmpl.has_alpha());
        assert_eq!(tmpl.get_pixel_unchecked(1, 1), 0);
    }
}
