//! The image to glyph pipeline
//!
//! ```text
//! source RGBA -> background removal -> effect -> enhancement
//!             -> compositing -> resize -> grayscale -> equalization
//!             -> glyph mapping [-> color sampling] -> layout
//! ```
//!
//! Each stage consumes the previous stage's image and produces a fresh
//! one. Stages switched off by the settings are skipped; the first
//! failing stage ends the conversion.

use crate::format::{AsciiCanvas, Formatter};
use crate::mapping::map_intensities;
use crate::palette::Palette;
use crate::sampler::{GlyphGrid, sample_colors};
use crate::settings::Settings;
use crate::{AsciiError, AsciiResult};
use log::{debug, info};
use lumaglyph_color::{convert_to_gray, equalize_histogram, flatten_alpha, remove_background};
use lumaglyph_core::{FPix, Pix, PixelDepth};
use lumaglyph_filter::{
    Effect, FilterResult, adjust_brightness, adjust_contrast, adjust_saturation,
    adjust_sharpness, apply_effect, unsharp_mask,
};
use lumaglyph_transform::{aspect_height, scale_to_size};

/// Size of the text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub chars: usize,
}

/// Everything one conversion produces.
#[derive(Debug, Clone)]
pub struct AsciiArt {
    canvas: AsciiCanvas,
    colored: Option<GlyphGrid>,
    processed: Pix,
}

impl AsciiArt {
    /// Formatted text rows.
    pub fn canvas(&self) -> &AsciiCanvas {
        &self.canvas
    }

    /// Rows joined by `\n`.
    pub fn text(&self) -> String {
        self.canvas.to_text()
    }

    /// Per-glyph colors, present when color output was requested.
    pub fn colored(&self) -> Option<&GlyphGrid> {
        self.colored.as_ref()
    }

    /// The opaque resized image the glyphs were sampled from.
    pub fn processed(&self) -> &Pix {
        &self.processed
    }

    pub fn stats(&self) -> Stats {
        Stats {
            lines: self.canvas.line_count(),
            chars: self.canvas.char_count(),
        }
    }
}

/// Decode an encoded image and convert it.
///
/// # Errors
///
/// Undecodable bytes give [`AsciiError::DecodeFailure`]; a zero-sized
/// image gives [`AsciiError::EmptySource`].
pub fn convert_bytes(data: &[u8], settings: &Settings) -> AsciiResult<AsciiArt> {
    settings.validate()?;
    let pix = lumaglyph_io::read_image_mem(data).map_err(|e| match e {
        lumaglyph_io::IoError::Core(lumaglyph_core::Error::InvalidDimension { width, height }) => {
            AsciiError::EmptySource { width, height }
        }
        other => AsciiError::DecodeFailure(other),
    })?;
    convert(&pix, settings)
}

/// Convert a decoded image to glyph art.
pub fn convert(pix: &Pix, settings: &Settings) -> AsciiResult<AsciiArt> {
    settings.validate()?;
    let (w, h) = pix.dimensions();
    debug!("converting {}x{} source", w, h);

    let mut image = match pix.depth() {
        PixelDepth::Bit8 => pix.convert_8_to_32()?,
        PixelDepth::Bit32 => pix.clone(),
    };

    if settings.remove_bg {
        debug!(
            "removing background (threshold {}, feather {})",
            settings.bg_threshold, settings.bg_feather
        );
        image = remove_background(&image, settings.bg_threshold, settings.bg_feather)?;
    }

    if settings.effects != Effect::None {
        image = apply_effect(&image, settings.effects)?;
    }

    image = enhance(image, settings)?;
    image = flatten_alpha(&image, settings.smart_background)?;
    let resized = resize(&image, settings)?;
    let (cols, rows) = resized.dimensions();
    debug!("resized to {}x{} glyphs", cols, rows);

    let gray = convert_to_gray(&resized, settings.color_mode, settings.color_channel)?;
    let intensities = if settings.adaptive {
        debug!("equalizing intensities");
        equalize_histogram(&gray)?
    } else {
        FPix::from_pix(&gray)?
    };

    let palette = Palette::new(settings.char_set);
    let glyphs = map_intensities(&intensities, &palette);

    let colored = if settings.color_ascii {
        let sampled: Vec<char> = if settings.reverse_colors {
            glyphs.iter().map(|&c| palette.reverse(c)).collect()
        } else {
            glyphs.clone()
        };
        Some(sample_colors(&sampled, &resized)?)
    } else {
        None
    };

    let canvas = Formatter::new(settings, &palette).format(&glyphs, cols as usize);
    let art = AsciiArt {
        canvas,
        colored,
        processed: resized,
    };
    let stats = art.stats();
    info!(
        "converted {}x{} image to {} lines, {} characters ({})",
        w, h, stats.lines, stats.chars, settings.char_set
    );
    Ok(art)
}

/// Brightness, contrast, sharpness, saturation; a factor of 1.0 is skipped.
fn enhance(mut image: Pix, settings: &Settings) -> AsciiResult<Pix> {
    let stages: [(&str, f32, fn(&Pix, f32) -> FilterResult<Pix>); 4] = [
        ("brightness", settings.brightness, adjust_brightness),
        ("contrast", settings.contrast, adjust_contrast),
        ("sharpness", settings.sharpness, adjust_sharpness),
        ("saturation", settings.saturation, adjust_saturation),
    ];
    for (name, factor, adjust) in stages {
        if factor == 1.0 {
            continue;
        }
        debug!("adjusting {} by {}", name, factor);
        image = adjust(&image, factor)?;
    }
    Ok(image)
}

/// Scale to the target columns, squashing rows by the aspect factor.
fn resize(image: &Pix, settings: &Settings) -> AsciiResult<Pix> {
    let (w, h) = image.dimensions();
    let target_w = settings.width;
    let target_h = aspect_height(w, h, target_w, settings.aspect_factor());

    let source = if settings.preserve_detail && target_w < w {
        unsharp_mask(image, 0.5, 100, 1)?
    } else {
        image.clone()
    };
    Ok(scale_to_size(&source, target_w, target_h)?)
}
