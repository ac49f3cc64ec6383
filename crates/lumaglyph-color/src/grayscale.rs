//! Grayscale conversion strategies
//!
//! - [`GrayMode::Weighted`]: ITU-R 601 luma in 16-bit fixed point
//! - [`GrayMode::Desaturate`]: HSL lightness, `(max + min) / 2`
//! - [`GrayMode::Channel`]: one raw RGB channel

use crate::{ColorError, ColorResult};
use lumaglyph_core::{Pix, PixelDepth, RgbComponent};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How RGB is reduced to a single intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrayMode {
    #[default]
    Weighted,
    Desaturate,
    Channel,
}

/// Channel used by [`GrayMode::Channel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorChannel {
    #[default]
    Red,
    Green,
    Blue,
}

impl GrayMode {
    pub const ALL: [GrayMode; 3] = [GrayMode::Weighted, GrayMode::Desaturate, GrayMode::Channel];

    pub fn name(self) -> &'static str {
        match self {
            GrayMode::Weighted => "weighted",
            GrayMode::Desaturate => "desaturate",
            GrayMode::Channel => "channel",
        }
    }
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 3] = [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            ColorChannel::Red => "red",
            ColorChannel::Green => "green",
            ColorChannel::Blue => "blue",
        }
    }

    fn component(self) -> RgbComponent {
        match self {
            ColorChannel::Red => RgbComponent::Red,
            ColorChannel::Green => RgbComponent::Green,
            ColorChannel::Blue => RgbComponent::Blue,
        }
    }
}

impl std::str::FromStr for GrayMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        GrayMode::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| ColorError::InvalidParameters(format!("unknown gray mode: {}", s)))
    }
}

impl std::str::FromStr for ColorChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ColorChannel::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| ColorError::InvalidParameters(format!("unknown channel: {}", s)))
    }
}

/// Reduce a 32 bpp image to 8 bpp intensities.
///
/// `channel` is only consulted for [`GrayMode::Channel`]. An 8 bpp
/// input is already gray and is returned as is.
pub fn convert_to_gray(pix: &Pix, mode: GrayMode, channel: ColorChannel) -> ColorResult<Pix> {
    if pix.depth() == PixelDepth::Bit8 {
        return Ok(pix.clone());
    }
    let gray = match mode {
        GrayMode::Weighted => pix.convert_rgb_to_luminance()?,
        GrayMode::Desaturate => pix.convert_rgb_to_lightness()?,
        GrayMode::Channel => pix.get_rgb_component(channel.component())?,
    };
    Ok(gray)
}
