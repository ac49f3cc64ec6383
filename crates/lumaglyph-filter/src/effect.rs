//! Named effect chains
//!
//! Each [`Effect`] is a fixed sequence of the filters in this crate.
//! Only the color channels are touched; alpha is carried through.

use crate::convolve::gaussian_blur;
use crate::edge::{edge_enhance, emboss, find_edges, smooth, unsharp_mask};
use crate::enhance::{autocontrast, invert};
use crate::{FilterError, FilterResult};
use lumaglyph_core::Pix;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A post-processing effect applied before resizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Effect {
    /// Leave the image unchanged
    None,
    /// Unsharp mask: radius 1.5, 200%, threshold 3
    #[default]
    Enhance,
    /// Gaussian blur (0.5) followed by edge enhancement
    Smooth,
    /// Edge detection, inverted, then smoothed
    Edge,
    /// Emboss followed by auto-contrast
    Artistic,
    /// Auto-contrast with 5% clipping, then a strong unsharp mask
    Dramatic,
}

impl Effect {
    /// All effects in declaration order.
    pub const ALL: [Effect; 6] = [
        Effect::None,
        Effect::Enhance,
        Effect::Smooth,
        Effect::Edge,
        Effect::Artistic,
        Effect::Dramatic,
    ];

    /// Lowercase name used in configuration files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Effect::None => "none",
            Effect::Enhance => "enhance",
            Effect::Smooth => "smooth",
            Effect::Edge => "edge",
            Effect::Artistic => "artistic",
            Effect::Dramatic => "dramatic",
        }
    }

    /// Look up an effect by its lowercase name.
    pub fn from_name(name: &str) -> Option<Effect> {
        Effect::ALL.into_iter().find(|e| e.name() == name)
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Effect {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Effect::from_name(&s.to_ascii_lowercase())
            .ok_or_else(|| FilterError::InvalidParameters(format!("unknown effect: {}", s)))
    }
}

/// Run the filter chain for `effect`.
pub fn apply_effect(pix: &Pix, effect: Effect) -> FilterResult<Pix> {
    log::debug!("applying effect {}", effect);
    match effect {
        Effect::None => Ok(pix.clone()),
        Effect::Enhance => unsharp_mask(pix, 1.5, 200, 3),
        Effect::Smooth => edge_enhance(&gaussian_blur(pix, 0.5)?),
        Effect::Edge => smooth(&invert(&find_edges(pix)?)?),
        Effect::Artistic => autocontrast(&emboss(pix)?, 0.0),
        Effect::Dramatic => unsharp_mask(&autocontrast(pix, 5.0)?, 2.0, 300, 5),
    }
}
