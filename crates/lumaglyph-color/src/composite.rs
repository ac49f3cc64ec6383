//! Alpha compositing onto a solid fill
//!
//! Images carrying alpha are flattened over a fill color. The "smart"
//! fill is the complement of the mean color of the mostly opaque pixels,
//! so the subject contrasts with whatever it is placed on.

use crate::ColorResult;
use lumaglyph_core::Pix;

/// Fill used when no smart fill is requested or none can be computed.
pub const DEFAULT_FILL: (u8, u8, u8) = (255, 255, 255);

/// Alpha above which a pixel counts toward the smart fill.
const SMART_FILL_MIN_ALPHA: u8 = 128;

/// Complement of the mean RGB over pixels with alpha above 128.
///
/// Each component is `255 - trunc(mean)`. Returns `None` if no pixel
/// is opaque enough.
pub fn smart_fill_color(pix: &Pix) -> ColorResult<Option<(u8, u8, u8)>> {
    let mean = pix.mean_rgb_where_alpha_above(SMART_FILL_MIN_ALPHA)?;
    Ok(mean.map(|(r, g, b)| {
        (
            255 - r.trunc() as u8,
            255 - g.trunc() as u8,
            255 - b.trunc() as u8,
        )
    }))
}

/// Composite an image over its fill and drop the alpha channel.
///
/// Images without alpha are returned unchanged.
pub fn flatten_alpha(pix: &Pix, smart: bool) -> ColorResult<Pix> {
    if !pix.has_alpha() {
        return Ok(pix.clone());
    }
    let fill = if smart {
        smart_fill_color(pix)?.unwrap_or(DEFAULT_FILL)
    } else {
        DEFAULT_FILL
    };
    log::debug!("compositing over fill ({}, {}, {})", fill.0, fill.1, fill.2);
    Ok(pix.blend_over_color(fill)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumaglyph_core::{PixMut, PixelDepth, color};

    fn half_clear() -> Pix {
        let mut pm = PixMut::new(2, 1, PixelDepth::Bit32).unwrap();
        pm.set_rgba(0, 0, 10, 100, 201, 255).unwrap();
        pm.set_rgba(1, 0, 0, 0, 0, 0).unwrap();
        pm.set_spp(4).unwrap();
        pm.into()
    }

    #[test]
    fn test_smart_fill_is_complement() {
        assert_eq!(
            smart_fill_color(&half_clear()).unwrap(),
            Some((245, 155, 54))
        );
    }

    #[test]
    fn test_flatten_uses_fill_under_transparency() {
        let out = flatten_alpha(&half_clear(), true).unwrap();
        assert!(!out.has_alpha());
        assert_eq!(out.get_rgb(0, 0), Some((10, 100, 201)));
        assert_eq!(out.get_rgb(1, 0), Some((245, 155, 54)));

        let out = flatten_alpha(&half_clear(), false).unwrap();
        assert_eq!(out.get_rgb(1, 0), Some(DEFAULT_FILL));
    }

    #[test]
    fn test_smart_fill_falls_back_to_white() {
        let mut pm = PixMut::new(1, 1, PixelDepth::Bit32).unwrap();
        pm.set_rgba(0, 0, 5, 5, 5, 128).unwrap();
        pm.set_spp(4).unwrap();
        let pix: Pix = pm.into();
        let out = flatten_alpha(&pix, true).unwrap();
        // 5 * 128/255 + 255 * 127/255 = 129.5, rounded up
        assert_eq!(color::red(out.get_pixel(0, 0).unwrap()), 130);
    }

    #[test]
    fn test_opaque_passes_through() {
        let mut pm = PixMut::new(1, 1, PixelDepth::Bit32).unwrap();
        pm.set_rgb(0, 0, 1, 2, 3).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(flatten_alpha(&pix, true).unwrap().data(), pix.data());
    }
}
