//! lumaglyph-color - Color processing for glyph rendering
//!
//! This crate provides the color stages that run around resizing:
//!
//! - **Background removal** ([`background`]): corner-estimated background, distance mask, feathering
//! - **Compositing** ([`composite`]): flatten alpha over a white or contrasting fill
//! - **Grayscale** ([`grayscale`]): weighted luma, HSL lightness, single channel
//! - **Equalization** ([`equalize`]): histogram equalization into float intensities

pub mod background;
pub mod composite;
pub mod equalize;
pub mod error;
pub mod grayscale;

// Re-export core types
pub use lumaglyph_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use background::{distance_to, estimate_background, remove_background};
pub use composite::{DEFAULT_FILL, flatten_alpha, smart_fill_color};
pub use equalize::{equalization_curve, equalize_histogram};
pub use grayscale::{ColorChannel, GrayMode, convert_to_gray};
