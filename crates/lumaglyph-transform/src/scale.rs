//! Image scaling operations
//!
//! Separable Lanczos-3 resampling. When downscaling, the filter support
//! widens by the scale factor so every source pixel contributes. Each
//! output sample's weights are normalized to sum to 1, and the
//! horizontal pass is clipped to 8 bits before the vertical pass.

use crate::{TransformError, TransformResult};
use lumaglyph_core::{Pix, PixMut, PixelDepth};

/// Lanczos window half-width in source pixels at scale 1.
const LANCZOS_SUPPORT: f64 = 3.0;

/// Height that keeps the source aspect ratio at `target_width`.
///
/// `factor` compensates for non-square output cells (0.55 for typical
/// terminal glyphs, 1.0 for none). The result is rounded and at least 1.
pub fn aspect_height(src_width: u32, src_height: u32, target_width: u32, factor: f64) -> u32 {
    let ratio = src_height as f64 / src_width as f64;
    let h = (target_width as f64 * ratio * factor).round();
    if h < 1.0 { 1 } else { h as u32 }
}

/// Scale an image to a specific size with a Lanczos-3 filter
///
/// # Arguments
/// * `pix` - Input 8 or 32 bpp image
/// * `width` - Target width
/// * `height` - Target height
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if a target dimension is 0.
pub fn scale_to_size(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size must be positive, got {}x{}",
            width, height
        )));
    }
    if pix.dimensions() == (width, height) {
        return Ok(pix.clone());
    }

    let horizontal = if width == pix.width() {
        pix.clone()
    } else {
        resample_axis(pix, width, Axis::Horizontal)?
    };
    if height == pix.height() {
        return Ok(horizontal);
    }
    resample_axis(&horizontal, height, Axis::Vertical)
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Source window and normalized weights for one output sample.
struct Contribution {
    start: u32,
    weights: Vec<f32>,
}

fn lanczos(x: f64) -> f64 {
    fn sinc(x: f64) -> f64 {
        if x == 0.0 {
            1.0
        } else {
            let px = std::f64::consts::PI * x;
            px.sin() / px
        }
    }
    if x.abs() < LANCZOS_SUPPORT {
        sinc(x) * sinc(x / LANCZOS_SUPPORT)
    } else {
        0.0
    }
}

fn contributions(in_size: u32, out_size: u32) -> Vec<Contribution> {
    let scale = in_size as f64 / out_size as f64;
    let filter_scale = scale.max(1.0);
    let support = LANCZOS_SUPPORT * filter_scale;

    (0..out_size)
        .map(|i| {
            let center = (i as f64 + 0.5) * scale;
            let start = ((center - support + 0.5).floor().max(0.0)) as u32;
            let end = ((center + support + 0.5).floor() as u32).min(in_size);
            let mut weights: Vec<f64> = (start..end)
                .map(|x| lanczos((x as f64 - center + 0.5) / filter_scale))
                .collect();
            let total: f64 = weights.iter().sum();
            if total != 0.0 {
                for w in &mut weights {
                    *w /= total;
                }
            }
            Contribution {
                start,
                weights: weights.into_iter().map(|w| w as f32).collect(),
            }
        })
        .collect()
}

/// Shifts of the byte channels that get filtered.
fn channel_shifts(pix: &Pix) -> &'static [u32] {
    match pix.depth() {
        PixelDepth::Bit8 => &[0],
        PixelDepth::Bit32 if pix.has_alpha() => &[24, 16, 8, 0],
        PixelDepth::Bit32 => &[24, 16, 8],
    }
}

fn resample_axis(pix: &Pix, out_len: u32, axis: Axis) -> TransformResult<Pix> {
    let (w, h) = pix.dimensions();
    let (out_w, out_h, in_len) = match axis {
        Axis::Horizontal => (out_len, h, w),
        Axis::Vertical => (w, out_len, h),
    };
    let contribs = contributions(in_len, out_len);
    let shifts = channel_shifts(pix);
    // Opaque 32 bpp output keeps alpha at 255.
    let base = match pix.depth() {
        PixelDepth::Bit32 if !pix.has_alpha() => 0xff,
        _ => 0,
    };

    let mut out = PixMut::new(out_w, out_h, pix.depth())?;
    out.set_spp(pix.spp())?;

    for oy in 0..out_h {
        for ox in 0..out_w {
            let (c, fixed) = match axis {
                Axis::Horizontal => (&contribs[ox as usize], oy),
                Axis::Vertical => (&contribs[oy as usize], ox),
            };
            let mut val = base;
            for &shift in shifts {
                let mut sum = 0.0f32;
                for (k, &wt) in c.weights.iter().enumerate() {
                    let s = c.start + k as u32;
                    let p = match axis {
                        Axis::Horizontal => pix.get_pixel_unchecked(s, fixed),
                        Axis::Vertical => pix.get_pixel_unchecked(fixed, s),
                    };
                    sum += ((p >> shift) & 0xff) as f32 * wt;
                }
                val |= (sum.round().clamp(0.0, 255.0) as u32) << shift;
            }
            out.set_pixel_unchecked(ox, oy, val);
        }
    }

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumaglyph_core::color;

    #[test]
    fn test_aspect_height() {
        assert_eq!(aspect_height(100, 50, 120, 0.55), 33);
        assert_eq!(aspect_height(100, 50, 120, 1.0), 60);
        assert_eq!(aspect_height(1000, 1, 50, 0.55), 1);
    }

    #[test]
    fn test_lanczos_window() {
        assert_eq!(lanczos(0.0), 1.0);
        assert!(lanczos(1.0).abs() < 1e-12);
        assert_eq!(lanczos(3.0), 0.0);
        assert!(lanczos(0.5) > 0.5);
    }

    #[test]
    fn test_contributions_normalized() {
        for (inp, out) in [(100, 37), (10, 25), (7, 7)] {
            for c in contributions(inp, out) {
                let total: f32 = c.weights.iter().sum();
                assert!((total - 1.0).abs() < 1e-4);
                assert!(c.start as usize + c.weights.len() <= inp as usize);
            }
        }
    }

    #[test]
    fn test_flat_image_stays_flat() {
        let mut pm = PixMut::new(40, 30, PixelDepth::Bit32).unwrap();
        pm.set_all(color::compose_rgb(12, 130, 250));
        let pix: Pix = pm.into();
        for (w, h) in [(13, 9), (90, 61)] {
            let out = scale_to_size(&pix, w, h).unwrap();
            assert_eq!(out.dimensions(), (w, h));
            assert_eq!(out.get_rgba(w / 2, h / 2), Some((12, 130, 250, 255)));
            assert_eq!(out.get_rgba(0, h - 1), Some((12, 130, 250, 255)));
        }
    }

    #[test]
    fn test_gray_and_alpha_channels() {
        let mut pm = PixMut::new(8, 8, PixelDepth::Bit8).unwrap();
        pm.set_all(77);
        let gray: Pix = pm.into();
        let out = scale_to_size(&gray, 3, 5).unwrap();
        assert_eq!(out.get_pixel(1, 2), Some(77));

        let mut pm = PixMut::new(8, 8, PixelDepth::Bit32).unwrap();
        pm.set_all(color::compose_rgba(1, 2, 3, 40));
        pm.set_spp(4).unwrap();
        let rgba: Pix = pm.into();
        let out = scale_to_size(&rgba, 4, 4).unwrap();
        assert!(out.has_alpha());
        assert_eq!(out.get_rgba(2, 2), Some((1, 2, 3, 40)));
    }

    #[test]
    fn test_zero_target_rejected() {
        let pix = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        assert!(scale_to_size(&pix, 0, 4).is_err());
    }
}
