//! Image enhancement operations
//!
//! Tone reproduction curve (TRC) mapping, histogram auto-contrast,
//! inversion, and the brightness/contrast/sharpness/saturation
//! adjustments. Each adjustment interpolates between a degenerate image
//! and the source; on 32 bpp images alpha is carried over unchanged.

use crate::convolve::convolve;
use crate::{FilterError, FilterResult, Kernel};
use lumaglyph_core::{Histogram, Pix, PixelDepth, color};

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input pixel values [0..255] to output pixel values [0..255].
pub type TrcLut = [u8; 256];

/// The identity lookup table.
pub fn identity_trc() -> TrcLut {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = i as u8;
    }
    lut
}

/// Lookup table that maps `v` to `255 - v`.
pub fn invert_trc() -> TrcLut {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = 255 - i as u8;
    }
    lut
}

/// Build a contrast-stretch table from a single channel histogram.
///
/// `cutoff` percent of the pixel count is removed from each end of the
/// histogram; the remaining `[lo, hi]` range is stretched to `[0, 255]`.
/// Returns the identity table when `hi <= lo`.
pub fn autocontrast_trc(hist: &Histogram, cutoff: f32) -> FilterResult<TrcLut> {
    if !(0.0..50.0).contains(&cutoff) {
        return Err(FilterError::InvalidParameters(format!(
            "cutoff must be in [0, 50), got {}",
            cutoff
        )));
    }

    let mut h: Vec<u64> = hist.iter().map(|&c| c as u64).collect();
    if cutoff > 0.0 {
        let n: u64 = h.iter().sum();
        let cut = (n as f64 * cutoff as f64 / 100.0).floor() as u64;
        trim_counts(h.iter_mut(), cut);
        trim_counts(h.iter_mut().rev(), cut);
    }

    let lo = h.iter().position(|&c| c > 0);
    let hi = h.iter().rposition(|&c| c > 0);
    let (lo, hi) = match (lo, hi) {
        (Some(lo), Some(hi)) if hi > lo => (lo as f64, hi as f64),
        _ => return Ok(identity_trc()),
    };

    let scale = 255.0 / (hi - lo);
    let offset = -lo * scale;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = ((i as f64 * scale + offset) as i32).clamp(0, 255) as u8;
    }
    Ok(lut)
}

/// Remove `cut` counts walking the bins in iteration order.
fn trim_counts<'a>(bins: impl Iterator<Item = &'a mut u64>, mut cut: u64) {
    for bin in bins {
        if cut == 0 {
            break;
        }
        let take = cut.min(*bin);
        *bin -= take;
        cut -= take;
    }
}

/// Apply one TRC lookup table to every color channel.
///
/// 8 bpp images are mapped directly; 32 bpp images keep their alpha.
pub fn trc_map(pix: &Pix, lut: &TrcLut) -> FilterResult<Pix> {
    trc_map_general(pix, lut, lut, lut)
}

/// Apply separate R, G, B TRC lookup tables.
///
/// For 8 bpp images only `lut_r` is used.
pub fn trc_map_general(
    pix: &Pix,
    lut_r: &TrcLut,
    lut_g: &TrcLut,
    lut_b: &TrcLut,
) -> FilterResult<Pix> {
    let mut out = pix.create_template();
    let (w, h) = pix.dimensions();

    match pix.depth() {
        PixelDepth::Bit8 => {
            for y in 0..h {
                for x in 0..w {
                    let val = pix.get_pixel_unchecked(x, y) as usize;
                    out.set_pixel_unchecked(x, y, lut_r[val] as u32);
                }
            }
        }
        PixelDepth::Bit32 => {
            for y in 0..h {
                for x in 0..w {
                    let (r, g, b, a) = color::extract_rgba(pix.get_pixel_unchecked(x, y));
                    let nr = lut_r[r as usize];
                    let ng = lut_g[g as usize];
                    let nb = lut_b[b as usize];
                    out.set_pixel_unchecked(x, y, color::compose_rgba(nr, ng, nb, a));
                }
            }
        }
    }

    Ok(out.into())
}

/// Stretch each channel's histogram to the full range.
///
/// # Arguments
///
/// * `pix` - Input 8 or 32 bpp image
/// * `cutoff` - Percent of pixels ignored at each end of the histogram
pub fn autocontrast(pix: &Pix, cutoff: f32) -> FilterResult<Pix> {
    match pix.depth() {
        PixelDepth::Bit8 => {
            let lut = autocontrast_trc(&pix.gray_histogram()?, cutoff)?;
            trc_map(pix, &lut)
        }
        PixelDepth::Bit32 => {
            let [hr, hg, hb] = pix.rgb_histograms()?;
            let lut_r = autocontrast_trc(&hr, cutoff)?;
            let lut_g = autocontrast_trc(&hg, cutoff)?;
            let lut_b = autocontrast_trc(&hb, cutoff)?;
            trc_map_general(pix, &lut_r, &lut_g, &lut_b)
        }
    }
}

/// Invert the color channels.
pub fn invert(pix: &Pix) -> FilterResult<Pix> {
    trc_map(pix, &invert_trc())
}

// =========================================================================
//  Degenerate-image adjustments
// =========================================================================

/// Scale brightness; 0.0 gives black, 1.0 the original.
pub fn adjust_brightness(pix: &Pix, factor: f32) -> FilterResult<Pix> {
    check_factor(factor)?;
    let degenerate = pix.create_template();
    blend_toward(&degenerate.into(), pix, factor)
}

/// Scale contrast around the mean luma; 0.0 gives a flat gray image.
pub fn adjust_contrast(pix: &Pix, factor: f32) -> FilterResult<Pix> {
    check_factor(factor)?;
    let mean = luma_image(pix)?.mean_gray()?.round() as u8;
    let mut degenerate = pix.create_template();
    degenerate.set_all(match pix.depth() {
        PixelDepth::Bit8 => mean as u32,
        PixelDepth::Bit32 => color::compose_rgb(mean, mean, mean),
    });
    blend_toward(&degenerate.into(), pix, factor)
}

/// Scale sharpness; 0.0 gives the smoothed image.
pub fn adjust_sharpness(pix: &Pix, factor: f32) -> FilterResult<Pix> {
    check_factor(factor)?;
    let degenerate = convolve(pix, &Kernel::smooth())?;
    blend_toward(&degenerate, pix, factor)
}

/// Scale color saturation; 0.0 gives the luma grayscale.
///
/// 8 bpp images carry no color and are returned unchanged.
pub fn adjust_saturation(pix: &Pix, factor: f32) -> FilterResult<Pix> {
    check_factor(factor)?;
    if pix.depth() == PixelDepth::Bit8 {
        return Ok(pix.clone());
    }
    let degenerate = luma_image(pix)?.convert_8_to_32()?;
    blend_toward(&degenerate, pix, factor)
}

/// Per channel `out = deg + (src - deg) * factor`, truncated and clipped.
///
/// The output takes its header and alpha from `src`.
fn blend_toward(degenerate: &Pix, src: &Pix, factor: f32) -> FilterResult<Pix> {
    let mix = |d: u8, s: u8| -> u8 {
        let v = d as f32 + (s as f32 - d as f32) * factor;
        if v <= 0.0 {
            0
        } else if v >= 255.0 {
            255
        } else {
            v as u8
        }
    };

    let mut out = src.create_template();
    let (w, h) = src.dimensions();
    for y in 0..h {
        for x in 0..w {
            let d = degenerate.get_pixel_unchecked(x, y);
            let s = src.get_pixel_unchecked(x, y);
            let val = match src.depth() {
                PixelDepth::Bit8 => mix(d as u8, s as u8) as u32,
                PixelDepth::Bit32 => {
                    let (dr, dg, db) = color::extract_rgb(d);
                    let (sr, sg, sb, sa) = color::extract_rgba(s);
                    color::compose_rgba(mix(dr, sr), mix(dg, sg), mix(db, sb), sa)
                }
            };
            out.set_pixel_unchecked(x, y, val);
        }
    }
    Ok(out.into())
}

fn luma_image(pix: &Pix) -> FilterResult<Pix> {
    match pix.depth() {
        PixelDepth::Bit8 => Ok(pix.clone()),
        PixelDepth::Bit32 => Ok(pix.convert_rgb_to_luminance()?),
    }
}

fn check_factor(factor: f32) -> FilterResult<()> {
    if factor.is_nan() || factor < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "enhancement factor must be >= 0, got {}",
            factor
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumaglyph_core::PixMut;

    fn two_tone() -> Pix {
        let mut pm = PixMut::new(4, 1, PixelDepth::Bit32).unwrap();
        pm.set_rgba(0, 0, 51, 100, 150, 10).unwrap();
        pm.set_rgba(1, 0, 51, 100, 150, 20).unwrap();
        pm.set_rgba(2, 0, 136, 151, 235, 30).unwrap();
        pm.set_rgba(3, 0, 136, 151, 235, 40).unwrap();
        pm.set_spp(4).unwrap();
        pm.into()
    }

    #[test]
    fn test_autocontrast_trc_stretches_range() {
        let mut hist = [0u32; 256];
        hist[51] = 10;
        hist[136] = 10;
        let lut = autocontrast_trc(&hist, 0.0).unwrap();
        assert_eq!(lut[51], 0);
        assert_eq!(lut[136], 255);
        assert_eq!(lut[100], 147);
        assert_eq!(lut[10], 0);
        assert_eq!(lut[200], 255);
    }

    #[test]
    fn test_autocontrast_trc_cutoff_drops_outliers() {
        let mut hist = [0u32; 256];
        hist[0] = 1;
        hist[100] = 98;
        hist[185] = 49;
        hist[255] = 2;
        // 150 pixels, 5% cut = 7 counts from each end.
        let lut = autocontrast_trc(&hist, 5.0).unwrap();
        assert_eq!(lut[100], 0);
        assert_eq!(lut[185], 255);
    }

    #[test]
    fn test_autocontrast_flat_is_identity() {
        let mut hist = [0u32; 256];
        hist[77] = 5;
        assert_eq!(autocontrast_trc(&hist, 0.0).unwrap(), identity_trc());
        assert!(autocontrast_trc(&hist, 60.0).is_err());
    }

    #[test]
    fn test_autocontrast_keeps_alpha() {
        let out = autocontrast(&two_tone(), 0.0).unwrap();
        assert_eq!(out.get_rgba(0, 0), Some((0, 0, 0, 10)));
        assert_eq!(out.get_rgba(3, 0), Some((255, 255, 255, 40)));
    }

    #[test]
    fn test_invert() {
        let out = invert(&two_tone()).unwrap();
        assert_eq!(out.get_rgba(1, 0), Some((204, 155, 105, 20)));
    }

    #[test]
    fn test_brightness_scales_channels() {
        let out = adjust_brightness(&two_tone(), 0.5).unwrap();
        assert_eq!(out.get_rgba(0, 0), Some((25, 50, 75, 10)));
        let out = adjust_brightness(&two_tone(), 2.0).unwrap();
        assert_eq!(out.get_rgba(2, 0), Some((255, 255, 255, 30)));
    }

    #[test]
    fn test_zero_contrast_is_flat_mean() {
        let pix = two_tone();
        let out = adjust_contrast(&pix, 0.0).unwrap();
        let (r, g, b) = out.get_rgb(0, 0).unwrap();
        assert_eq!((r, g, b), out.get_rgb(3, 0).unwrap());
        assert_eq!(r, g);
        assert_eq!(g, b);
        let l0 = color::luma(51, 100, 150) as f64;
        let l1 = color::luma(136, 151, 235) as f64;
        assert_eq!(r, ((l0 + l1) / 2.0).round() as u8);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let out = adjust_saturation(&two_tone(), 0.0).unwrap();
        let l = color::luma(51, 100, 150);
        assert_eq!(out.get_rgba(0, 0), Some((l, l, l, 10)));
    }

    #[test]
    fn test_sharpness_one_is_identity_on_flat() {
        let mut pm = PixMut::new(3, 3, PixelDepth::Bit8).unwrap();
        pm.set_all(99);
        let pix: Pix = pm.into();
        let out = adjust_sharpness(&pix, 2.5).unwrap();
        assert_eq!(out.data(), pix.data());
        assert!(adjust_sharpness(&pix, -1.0).is_err());
    }
}
