//! Edge detection and enhancement operations
//!
//! Fixed 3x3 kernel filters and unsharp masking. All functions accept
//! 8 bpp and 32 bpp images; on 32 bpp images alpha is preserved.

use crate::convolve::{convolve, gaussian_blur};
use crate::{FilterError, FilterResult, Kernel};
use lumaglyph_core::{Pix, PixelDepth, color};

/// Sharpen by adding back the difference from a Gaussian-blurred copy.
///
/// Per channel, `diff = src - blurred`; where `|diff| >= threshold` the
/// output is `src + diff * percent / 100` (integer arithmetic, clipped
/// to `[0, 255]`), elsewhere it is `src`.
///
/// # Arguments
/// * `pix` - Input 8 or 32 bpp image
/// * `radius` - Gaussian standard deviation of the blur
/// * `percent` - Sharpening strength in percent
/// * `threshold` - Minimum difference that gets sharpened
pub fn unsharp_mask(pix: &Pix, radius: f32, percent: i32, threshold: i32) -> FilterResult<Pix> {
    if percent < 0 || threshold < 0 {
        return Err(FilterError::InvalidParameters(format!(
            "percent and threshold must be >= 0, got {} and {}",
            percent, threshold
        )));
    }
    let blurred = gaussian_blur(pix, radius)?;
    let sharpen = |src: u8, blur: u8| -> u8 {
        let diff = src as i32 - blur as i32;
        if diff.abs() >= threshold {
            (src as i32 + diff * percent / 100).clamp(0, 255) as u8
        } else {
            src
        }
    };

    let mut out = pix.create_template();
    let (w, h) = pix.dimensions();
    for y in 0..h {
        for x in 0..w {
            let s = pix.get_pixel_unchecked(x, y);
            let b = blurred.get_pixel_unchecked(x, y);
            let val = match pix.depth() {
                PixelDepth::Bit8 => sharpen(s as u8, b as u8) as u32,
                PixelDepth::Bit32 => {
                    let (sr, sg, sb, sa) = color::extract_rgba(s);
                    let (br, bg, bb) = color::extract_rgb(b);
                    color::compose_rgba(sharpen(sr, br), sharpen(sg, bg), sharpen(sb, bb), sa)
                }
            };
            out.set_pixel_unchecked(x, y, val);
        }
    }
    Ok(out.into())
}

/// Strengthen edges with [`Kernel::edge_enhance`].
pub fn edge_enhance(pix: &Pix) -> FilterResult<Pix> {
    convolve(pix, &Kernel::edge_enhance())
}

/// Detect edges with [`Kernel::find_edges`].
pub fn find_edges(pix: &Pix) -> FilterResult<Pix> {
    convolve(pix, &Kernel::find_edges())
}

/// Light smoothing with [`Kernel::smooth`].
pub fn smooth(pix: &Pix) -> FilterResult<Pix> {
    convolve(pix, &Kernel::smooth())
}

/// Emboss with [`Kernel::emboss`]; flat regions become mid gray.
pub fn emboss(pix: &Pix) -> FilterResult<Pix> {
    convolve(pix, &Kernel::emboss())
}
