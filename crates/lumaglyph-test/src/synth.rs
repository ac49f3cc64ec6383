//! Synthetic test images
//!
//! The regression tests build their inputs in code rather than loading
//! files, so every expected value can be derived by hand.

use crate::error::TestResult;
use lumaglyph_core::{Pix, PixMut, PixelDepth, color};

/// Opaque image filled with one color.
pub fn solid_rgb(width: u32, height: u32, rgb: (u8, u8, u8)) -> TestResult<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
    pm.set_all(color::compose_rgb(rgb.0, rgb.1, rgb.2));
    Ok(pm.into())
}

/// Image with alpha (`spp = 4`) filled with one RGBA value.
pub fn solid_rgba(width: u32, height: u32, rgba: (u8, u8, u8, u8)) -> TestResult<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
    pm.set_all(color::compose_rgba(rgba.0, rgba.1, rgba.2, rgba.3));
    pm.set_spp(4)?;
    Ok(pm.into())
}

/// 8 bpp image whose value rises linearly from 0 at the left edge to 255
/// at the right edge.
pub fn gray_ramp(width: u32, height: u32) -> TestResult<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit8)?;
    for y in 0..height {
        for x in 0..width {
            pm.set_pixel_unchecked(x, y, ramp_value(x, width) as u32);
        }
    }
    Ok(pm.into())
}

/// Opaque gray image with the same left-to-right ramp as [`gray_ramp`].
pub fn rgb_ramp(width: u32, height: u32) -> TestResult<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
    for y in 0..height {
        for x in 0..width {
            let v = ramp_value(x, width);
            pm.set_pixel_unchecked(x, y, color::compose_rgb(v, v, v));
        }
    }
    Ok(pm.into())
}

fn ramp_value(x: u32, width: u32) -> u8 {
    if width <= 1 {
        0
    } else {
        (x * 255 / (width - 1)) as u8
    }
}

/// Opaque image of a filled disk centered on a uniform background.
pub fn disk_on_background(
    width: u32,
    height: u32,
    radius: f32,
    fg: (u8, u8, u8),
    bg: (u8, u8, u8),
) -> TestResult<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
    let cx = (width as f32 - 1.0) / 2.0;
    let cy = (height as f32 - 1.0) / 2.0;
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let (r, g, b) = if dx * dx + dy * dy <= radius * radius {
                fg
            } else {
                bg
            };
            pm.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
        }
    }
    Ok(pm.into())
}

/// Opaque image of deterministic pseudo-random colors.
pub fn noise_rgb(width: u32, height: u32, seed: u64) -> TestResult<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
    // xorshift64; a zero state would stay zero.
    let mut state = seed | 1;
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let v = (state >> 32) as u32;
            pm.set_pixel_unchecked(x, y, v | 0xff);
        }
    }
    Ok(pm.into())
}

/// Encode an image as PNG bytes.
pub fn encode_png(pix: &Pix) -> TestResult<Vec<u8>> {
    Ok(lumaglyph_io::write_png_mem(pix)?)
}

/// A 24-bit BMP file header claiming `width` x `height` pixels, followed
/// by no pixel data at all.
pub fn bmp_header(width: i32, height: i32) -> Vec<u8> {
    let mut out = Vec::with_capacity(54);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&[0; 24]);
    out
}
