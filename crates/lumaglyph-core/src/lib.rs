//! lumaglyph Core - Basic data structures for image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the lumaglyph pipeline:
//!
//! - [`Pix`] / [`PixMut`] - The main image container (immutable / mutable)
//! - [`FPix`] - Floating-point intensity image
//! - [`Histogram`] - 256-bin value counts

pub mod error;
pub mod fpix;
pub mod pix;

pub use error::{Error, Result};
pub use fpix::FPix;
pub use pix::{Histogram, Pix, PixMut, PixelDepth, RgbComponent};

/// Color channel indices and helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Red channel (MSB, byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (LSB, byte 3)
    pub const ALPHA: usize = 3;

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Fixed-point luma weights (ITU-R 601, scaled by 2^16).
    pub const LUMA_RED_WEIGHT: u32 = 19595;
    pub const LUMA_GREEN_WEIGHT: u32 = 38470;
    pub const LUMA_BLUE_WEIGHT: u32 = 7471;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Replace the alpha byte of a 32-bit pixel.
    #[inline]
    pub fn with_alpha(pixel: u32, a: u8) -> u32 {
        (pixel & !0xff) | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Perceptually weighted luma of an RGB triple.
    ///
    /// Computes `0.299 R + 0.587 G + 0.114 B` in 16-bit fixed point,
    /// rounding to nearest.
    #[inline]
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        let sum = r as u32 * LUMA_RED_WEIGHT
            + g as u32 * LUMA_GREEN_WEIGHT
            + b as u32 * LUMA_BLUE_WEIGHT
            + 0x8000;
        (sum >> 16) as u8
    }

    /// HSL lightness of an RGB triple: `(max + min) / 2`.
    #[inline]
    pub fn lightness(r: u8, g: u8, b: u8) -> u8 {
        let max = r.max(g).max(b) as u16;
        let min = r.min(g).min(b) as u16;
        ((max + min) / 2) as u8
    }

}
