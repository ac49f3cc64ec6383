//! Convolution operations
//!
//! Implements image convolution with arbitrary kernels. Pixels outside
//! the image are replaced by the nearest edge pixel. On 32 bpp images
//! only the color channels are filtered; each output pixel keeps the
//! alpha byte of its source pixel.

use crate::{FilterError, FilterResult, Kernel};
use lumaglyph_core::{Pix, PixelDepth, color};

/// Convolve an 8-bit grayscale image with a kernel
pub fn convolve_gray(pix: &Pix, kernel: &Kernel) -> FilterResult<Pix> {
    check_depth(pix, PixelDepth::Bit8, "8 bpp")?;

    let (w, h) = pix.dimensions();
    let kcx = kernel.center_x() as i32;
    let kcy = kernel.center_y() as i32;
    let mut out = pix.create_template();

    for y in 0..h {
        for x in 0..w {
            let mut sum = kernel.offset();
            for ky in 0..kernel.height() {
                let sy = clamp_coord(y as i32 + ky as i32 - kcy, h);
                for kx in 0..kernel.width() {
                    let sx = clamp_coord(x as i32 + kx as i32 - kcx, w);
                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    sum += pix.get_pixel_unchecked(sx, sy) as f32 * k;
                }
            }
            out.set_pixel_unchecked(x, y, to_u8(sum) as u32);
        }
    }

    Ok(out.into())
}

/// Convolve the color channels of a 32-bit image with a kernel
pub fn convolve_color(pix: &Pix, kernel: &Kernel) -> FilterResult<Pix> {
    check_depth(pix, PixelDepth::Bit32, "32 bpp")?;

    let (w, h) = pix.dimensions();
    let kcx = kernel.center_x() as i32;
    let kcy = kernel.center_y() as i32;
    let mut out = pix.create_template();

    for y in 0..h {
        for x in 0..w {
            let mut sum = [kernel.offset(); 3];
            for ky in 0..kernel.height() {
                let sy = clamp_coord(y as i32 + ky as i32 - kcy, h);
                for kx in 0..kernel.width() {
                    let sx = clamp_coord(x as i32 + kx as i32 - kcx, w);
                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(sx, sy));
                    sum[0] += r as f32 * k;
                    sum[1] += g as f32 * k;
                    sum[2] += b as f32 * k;
                }
            }
            let a = color::alpha(pix.get_pixel_unchecked(x, y));
            let result = color::compose_rgba(to_u8(sum[0]), to_u8(sum[1]), to_u8(sum[2]), a);
            out.set_pixel_unchecked(x, y, result);
        }
    }

    Ok(out.into())
}

/// Convolve an image (auto-dispatch based on depth)
pub fn convolve(pix: &Pix, kernel: &Kernel) -> FilterResult<Pix> {
    match pix.depth() {
        PixelDepth::Bit8 => convolve_gray(pix, kernel),
        PixelDepth::Bit32 => convolve_color(pix, kernel),
    }
}

/// Convolve with a horizontal kernel followed by a vertical kernel
pub fn convolve_separable(pix: &Pix, kernel_x: &Kernel, kernel_y: &Kernel) -> FilterResult<Pix> {
    let tmp = convolve(pix, kernel_x)?;
    convolve(&tmp, kernel_y)
}

/// Apply Gaussian blur with standard deviation `sigma`
///
/// A `sigma` of zero returns the image unchanged.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] for negative or NaN `sigma`.
pub fn gaussian_blur(pix: &Pix, sigma: f32) -> FilterResult<Pix> {
    if sigma == 0.0 {
        return Ok(pix.clone());
    }
    let kx = Kernel::gaussian_1d(sigma)?;
    let ky = kx.transposed();
    convolve_separable(pix, &kx, &ky)
}

#[inline]
fn clamp_coord(v: i32, len: u32) -> u32 {
    v.clamp(0, len as i32 - 1) as u32
}

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn check_depth(pix: &Pix, depth: PixelDepth, expected: &'static str) -> FilterResult<()> {
    if pix.depth() != depth {
        return Err(FilterError::UnsupportedDepth {
            expected,
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumaglyph_core::PixMut;

    fn gray_step(width: u32) -> Pix {
        let mut pm = PixMut::new(width, 3, PixelDepth::Bit8).unwrap();
        for y in 0..3 {
            for x in width / 2..width {
                pm.set_pixel_unchecked(x, y, 200);
            }
        }
        pm.into()
    }

    #[test]
    fn test_identity_kernel() {
        let pix = gray_step(8);
        let k = Kernel::from_slice(3, 3, &[0., 0., 0., 0., 1., 0., 0., 0., 0.]).unwrap();
        let out = convolve(&pix, &k).unwrap();
        assert_eq!(out.data(), pix.data());
    }

    #[test]
    fn test_replicate_border_keeps_flat_image() {
        let mut pm = PixMut::new(5, 5, PixelDepth::Bit32).unwrap();
        pm.set_all(color::compose_rgba(90, 10, 240, 77));
        let pix: Pix = pm.into();
        let out = gaussian_blur(&pix, 2.0).unwrap();
        assert_eq!(out.data(), pix.data());
    }

    #[test]
    fn test_alpha_untouched_by_color_convolution() {
        let mut pm = PixMut::new(3, 1, PixelDepth::Bit32).unwrap();
        pm.set_rgba(0, 0, 0, 0, 0, 10).unwrap();
        pm.set_rgba(1, 0, 255, 255, 255, 20).unwrap();
        pm.set_rgba(2, 0, 0, 0, 0, 30).unwrap();
        pm.set_spp(4).unwrap();
        let pix: Pix = pm.into();
        let out = convolve(&pix, &Kernel::smooth()).unwrap();
        assert!(out.has_alpha());
        assert_eq!(color::alpha(out.get_pixel(0, 0).unwrap()), 10);
        assert_eq!(color::alpha(out.get_pixel(1, 0).unwrap()), 20);
        assert_eq!(color::alpha(out.get_pixel(2, 0).unwrap()), 30);
    }

    #[test]
    fn test_gaussian_blur_softens_step() {
        let pix = gray_step(10);
        let out = gaussian_blur(&pix, 1.0).unwrap();
        let left = out.get_pixel(4, 1).unwrap();
        let right = out.get_pixel(5, 1).unwrap();
        assert!(left > 0 && left < 100);
        assert!(right > 100 && right < 200);
        assert_eq!(out.get_pixel(0, 1), Some(0));
    }

    #[test]
    fn test_gaussian_rejects_negative_sigma() {
        let pix = gray_step(4);
        assert!(gaussian_blur(&pix, -1.0).is_err());
    }
}
