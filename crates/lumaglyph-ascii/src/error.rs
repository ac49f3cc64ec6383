//! Error types for lumaglyph-ascii

use thiserror::Error;

/// Errors that can occur while converting an image to glyphs
///
/// Every variant is terminal for one conversion; no partial output is
/// produced.
#[derive(Debug, Error)]
pub enum AsciiError {
    /// A setting is outside its declared range
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The source bytes are not a decodable image
    #[error("decode failure: {0}")]
    DecodeFailure(#[from] lumaglyph_io::IoError),

    /// The source image has no pixels
    #[error("empty source image: {width}x{height}")]
    EmptySource { width: u32, height: u32 },

    /// The character set name is not in the catalog
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lumaglyph_core::Error),

    /// Filter stage error
    #[error("filter error: {0}")]
    Filter(#[from] lumaglyph_filter::FilterError),

    /// Resize stage error
    #[error("transform error: {0}")]
    Transform(#[from] lumaglyph_transform::TransformError),

    /// Color stage error
    #[error("color error: {0}")]
    Color(#[from] lumaglyph_color::ColorError),
}

/// Result type for conversion operations
pub type AsciiResult<T> = Result<T, AsciiError>;
