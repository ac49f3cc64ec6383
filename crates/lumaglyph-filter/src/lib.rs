//! lumaglyph-filter - Image filtering operations
//!
//! This crate provides the filters used before an image is quantized
//! into glyphs:
//!
//! - Convolution with arbitrary kernels and separable Gaussian blur
//! - Edge detection, edge enhancement, emboss and smoothing kernels
//! - Unsharp masking
//! - Histogram auto-contrast and inversion
//! - Brightness, contrast, sharpness and saturation adjustments
//! - Named [`Effect`] chains

pub mod convolve;
pub mod edge;
pub mod effect;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{convolve, convolve_color, convolve_gray, convolve_separable, gaussian_blur};
pub use edge::{edge_enhance, emboss, find_edges, smooth, unsharp_mask};
pub use effect::{Effect, apply_effect};
pub use enhance::{
    TrcLut, adjust_brightness, adjust_contrast, adjust_saturation, adjust_sharpness, autocontrast,
    autocontrast_trc, invert, trc_map, trc_map_general,
};
