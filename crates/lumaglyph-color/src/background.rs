//! Background removal
//!
//! The background color is estimated from the four corner pixels. Every
//! pixel closer than a threshold (Euclidean RGB distance) to that color
//! becomes transparent; all others become opaque. The resulting alpha
//! mask can be feathered with a Gaussian blur.

use crate::{ColorError, ColorResult};
use lumaglyph_core::{Pix, PixMut, PixelDepth, RgbComponent, color};
use lumaglyph_filter::gaussian_blur;

/// Fallback when every corner is fully transparent.
const WHITE: [f64; 3] = [255.0, 255.0, 255.0];

/// Estimate the background color from the image corners.
///
/// Averages the RGB of the corners whose alpha is nonzero. Images
/// without an alpha channel count every corner.
pub fn estimate_background(pix: &Pix) -> ColorResult<[f64; 3]> {
    check_rgb(pix)?;
    let (w, h) = pix.dimensions();
    let corners = [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)];

    let mut sum = [0.0f64; 3];
    let mut count = 0u32;
    for (x, y) in corners {
        let (r, g, b, a) = color::extract_rgba(pix.get_pixel_unchecked(x, y));
        if pix.has_alpha() && a == 0 {
            continue;
        }
        sum[0] += r as f64;
        sum[1] += g as f64;
        sum[2] += b as f64;
        count += 1;
    }

    if count == 0 {
        return Ok(WHITE);
    }
    let n = count as f64;
    Ok([sum[0] / n, sum[1] / n, sum[2] / n])
}

/// Euclidean RGB distance from a pixel to a reference color.
pub fn distance_to(pixel: u32, reference: &[f64; 3]) -> f64 {
    let (r, g, b) = color::extract_rgb(pixel);
    let dr = r as f64 - reference[0];
    let dg = g as f64 - reference[1];
    let db = b as f64 - reference[2];
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Replace the alpha channel with a background mask.
///
/// # Arguments
///
/// * `pix` - 32 bpp image, with or without alpha
/// * `threshold` - Pixels closer than this to the background become transparent; 1..=255
/// * `feather` - Gaussian radius applied to the mask; 0 disables feathering
///
/// The RGB channels are copied unchanged and the output carries alpha.
pub fn remove_background(pix: &Pix, threshold: u32, feather: u32) -> ColorResult<Pix> {
    check_rgb(pix)?;
    if !(1..=255).contains(&threshold) {
        return Err(ColorError::InvalidParameters(format!(
            "background threshold must be in 1..=255, got {}",
            threshold
        )));
    }

    let bg = estimate_background(pix)?;
    log::debug!(
        "estimated background color ({:.1}, {:.1}, {:.1})",
        bg[0],
        bg[1],
        bg[2]
    );

    let (w, h) = pix.dimensions();
    let mut mask = PixMut::new(w, h, PixelDepth::Bit8)?;
    let limit = threshold as f64;
    for y in 0..h {
        for x in 0..w {
            if distance_to(pix.get_pixel_unchecked(x, y), &bg) >= limit {
                mask.set_pixel_unchecked(x, y, 255);
            }
        }
    }

    let mut mask: Pix = mask.into();
    if feather > 0 {
        mask = gaussian_blur(&mask, feather as f32)?;
    }

    let mut out = pix.to_mut();
    out.set_rgb_component(&mask, RgbComponent::Alpha)?;
    Ok(out.into())
}

fn check_rgb(pix: &Pix) -> ColorResult<()> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(ColorError::UnsupportedDepth {
            expected: "32 bpp",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}
