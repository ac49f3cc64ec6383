//! Lumaglyph - Raster images as glyph art
//!
//! Converts an image into rows of characters whose ink density follows
//! the image's brightness, optionally with a per-glyph color grid.
//!
//! # Overview
//!
//! A conversion runs a fixed chain of stages, each switched by
//! [`Settings`]:
//!
//! - Background isolation (corner estimate, distance mask, feathering)
//! - Effects and enhancement (unsharp, emboss, auto-contrast, factors)
//! - Alpha compositing over a white or contrasting fill
//! - Aspect-corrected Lanczos resizing
//! - Grayscale mapping and histogram equalization
//! - Palette quantization and row formatting
//!
//! # Example
//!
//! ```
//! use lumaglyph::{Pix, PixelDepth, Settings};
//!
//! let pix = Pix::new(120, 60, PixelDepth::Bit32).unwrap();
//! let settings = Settings { width: 60, ..Default::default() };
//! let art = lumaglyph::convert(&pix, &settings).unwrap();
//! assert_eq!(art.canvas().rows()[0].chars().count(), 60);
//! ```

pub mod cli;
pub mod config;

// Re-export core types (primary data structures used everywhere)
pub use lumaglyph_core::*;

// The conversion entry points
pub use lumaglyph_ascii::{AsciiArt, AsciiError, CharSet, Settings, convert, convert_bytes};

// Re-export domain crates as modules to avoid name conflicts
pub use lumaglyph_ascii as ascii;
pub use lumaglyph_color as color;
pub use lumaglyph_filter as filter;
pub use lumaglyph_io as io;
pub use lumaglyph_transform as transform;
