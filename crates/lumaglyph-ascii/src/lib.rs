//! lumaglyph-ascii - Image to glyph-art conversion
//!
//! This crate ties the image stages together into one conversion:
//!
//! - **Palettes** ([`palette`]): the glyph catalog and light/dark reversal
//! - **Settings** ([`settings`]): the validated option snapshot
//! - **Mapping** ([`mapping`]): intensity to palette index quantization
//! - **Sampling** ([`sampler`]): per-glyph colors for color output
//! - **Formatting** ([`format`]): row layout and borders
//! - **Pipeline** ([`pipeline`]): [`convert`] and [`convert_bytes`]
//! - **Export** ([`export`]): text, Markdown, HTML and ANSI renderers
//!
//! # Example
//!
//! ```no_run
//! use lumaglyph_ascii::{Settings, convert_bytes};
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let art = convert_bytes(&bytes, &Settings::default()).unwrap();
//! println!("{}", art.text());
//! ```

mod error;
pub mod export;
pub mod format;
pub mod mapping;
pub mod palette;
pub mod pipeline;
pub mod sampler;
pub mod settings;

pub use error::{AsciiError, AsciiResult};

pub use export::{
    ExportFormat, HtmlTheme, render, render_ansi, render_html, render_markdown, render_text,
};
pub use format::{AsciiCanvas, Formatter, add_border};
pub use mapping::{glyph_index, map_intensities};
pub use palette::{CharSet, Palette};
pub use pipeline::{AsciiArt, Stats, convert, convert_bytes};
pub use sampler::{ColoredGlyph, Glyph, GlyphGrid, sample_colors};
pub use settings::Settings;

// Stage option types that appear in Settings
pub use lumaglyph_color::{ColorChannel, GrayMode};
pub use lumaglyph_filter::Effect;
