//! lumaglyph-transform - Geometric transformations for lumaglyph
//!
//! This crate provides Lanczos-3 scaling and the aspect-ratio helper
//! used to size glyph grids.

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{aspect_height, scale_to_size};
