//! Conversion settings
//!
//! [`Settings`] is captured once per conversion and never changes while
//! the pipeline runs. Missing fields in a configuration file fall back
//! to [`Settings::default`].

use crate::palette::CharSet;
use crate::{AsciiError, AsciiResult};
use lumaglyph_color::{ColorChannel, GrayMode};
use lumaglyph_filter::Effect;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed output width in characters.
pub const WIDTH_RANGE: RangeInclusive<u32> = 50..=500;
/// Allowed background distance threshold.
pub const BG_THRESHOLD_RANGE: RangeInclusive<u32> = 1..=255;
/// Allowed feather radius for the background mask.
pub const BG_FEATHER_RANGE: RangeInclusive<u32> = 0..=20;
/// Upper bound of the enhancement multipliers; the lower bound is exclusive 0.
pub const MAX_ENHANCE_FACTOR: f32 = 3.0;

/// Options for one image-to-glyph conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output columns
    pub width: u32,
    pub brightness: f32,
    pub contrast: f32,
    pub sharpness: f32,
    pub saturation: f32,
    /// Isolate the subject from a uniform background
    pub remove_bg: bool,
    /// RGB distance below which a pixel counts as background
    pub bg_threshold: u32,
    /// Gaussian radius used to soften the background mask
    pub bg_feather: u32,
    pub effects: Effect,
    pub char_set: CharSet,
    /// Equalize intensities before mapping to glyphs
    pub adaptive: bool,
    /// Pre-sharpen before downscaling
    pub preserve_detail: bool,
    /// Squash rows to compensate for tall character cells
    pub aspect_correction: bool,
    pub color_mode: GrayMode,
    pub color_channel: ColorChannel,
    pub double_width: bool,
    pub add_spacing: bool,
    pub reverse_colors: bool,
    pub add_border: bool,
    pub border_char: char,
    /// Composite transparent images over a contrasting color
    pub smart_background: bool,
    /// Also produce a per-glyph color grid
    pub color_ascii: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            width: 120,
            brightness: 1.0,
            contrast: 1.0,
            sharpness: 1.0,
            saturation: 1.0,
            remove_bg: false,
            bg_threshold: 240,
            bg_feather: 5,
            effects: Effect::Enhance,
            char_set: CharSet::Detailed,
            adaptive: true,
            preserve_detail: true,
            aspect_correction: true,
            color_mode: GrayMode::Weighted,
            color_channel: ColorChannel::Red,
            double_width: false,
            add_spacing: false,
            reverse_colors: false,
            add_border: false,
            border_char: '█',
            smart_background: true,
            color_ascii: false,
        }
    }
}

impl Settings {
    /// Check every field against its declared range.
    ///
    /// # Errors
    ///
    /// Returns [`AsciiError::InvalidSettings`] naming the first bad field.
    pub fn validate(&self) -> AsciiResult<()> {
        check_range("width", self.width, &WIDTH_RANGE)?;
        check_range("bg_threshold", self.bg_threshold, &BG_THRESHOLD_RANGE)?;
        check_range("bg_feather", self.bg_feather, &BG_FEATHER_RANGE)?;
        for (name, value) in self.enhance_factors() {
            if !(value > 0.0 && value <= MAX_ENHANCE_FACTOR) {
                return Err(AsciiError::InvalidSettings(format!(
                    "{} must be in (0, {}], got {}",
                    name, MAX_ENHANCE_FACTOR, value
                )));
            }
        }
        if self.border_char.is_control() {
            return Err(AsciiError::InvalidSettings(format!(
                "border_char must be printable, got {:?}",
                self.border_char
            )));
        }
        Ok(())
    }

    /// Enhancement multipliers in the order they are applied.
    pub fn enhance_factors(&self) -> [(&'static str, f32); 4] {
        [
            ("brightness", self.brightness),
            ("contrast", self.contrast),
            ("sharpness", self.sharpness),
            ("saturation", self.saturation),
        ]
    }

    /// Row height factor applied when sizing the glyph grid.
    pub fn aspect_factor(&self) -> f64 {
        if self.aspect_correction { 0.55 } else { 1.0 }
    }
}

fn check_range(name: &str, value: u32, range: &RangeInclusive<u32>) -> AsciiResult<()> {
    if !range.contains(&value) {
        return Err(AsciiError::InvalidSettings(format!(
            "{} must be in {}..={}, got {}",
            name,
            range.start(),
            range.end(),
            value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let s = Settings::default();
        s.validate().unwrap();
        assert_eq!(s.width, 120);
        assert_eq!(s.effects, Effect::Enhance);
        assert_eq!(s.char_set, CharSet::Detailed);
    }

    #[test]
    fn test_out_of_range_fields() {
        let bad = [
            Settings { width: 49, ..Default::default() },
            Settings { width: 501, ..Default::default() },
            Settings { bg_threshold: 0, ..Default::default() },
            Settings { bg_feather: 21, ..Default::default() },
            Settings { contrast: 0.0, ..Default::default() },
            Settings { saturation: 3.5, ..Default::default() },
            Settings { brightness: f32::NAN, ..Default::default() },
            Settings { border_char: '\n', ..Default::default() },
        ];
        for s in bad {
            assert!(
                matches!(s.validate(), Err(AsciiError::InvalidSettings(_))),
                "{:?} should be rejected",
                s
            );
        }
        Settings { sharpness: 3.0, ..Default::default() }.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let s: Settings = toml::from_str(
            r##"
            width = 80
            effects = "dramatic"
            char_set = "Braille"
            color_mode = "channel"
            color_channel = "blue"
            border_char = "#"
            "##,
        )
        .unwrap();
        assert_eq!(s.width, 80);
        assert_eq!(s.effects, Effect::Dramatic);
        assert_eq!(s.char_set, CharSet::Braille);
        assert_eq!(s.color_mode, GrayMode::Channel);
        assert_eq!(s.color_channel, ColorChannel::Blue);
        assert_eq!(s.border_char, '#');
        assert_eq!(s.bg_threshold, 240);
        assert!(s.adaptive);
    }

    #[test]
    fn test_palette_names_match_command_line() {
        let s: Settings = toml::from_str("char_set = \"classic\"").unwrap();
        assert_eq!(s.char_set, CharSet::Classic);
        let err = toml::from_str::<Settings>("char_set = \"Emoji\"").unwrap_err();
        assert!(err.to_string().contains("unknown palette: Emoji"), "{}", err);
    }

    #[test]
    fn test_palette_name_written_back() {
        let text = toml::to_string(&Settings::default()).unwrap();
        assert!(text.contains("char_set = \"Detailed\""), "{}", text);
    }

    #[test]
    fn test_settings_are_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Settings>();
    }
}
