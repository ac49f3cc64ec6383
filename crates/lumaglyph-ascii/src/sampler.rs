//! Per-glyph color sampling
//!
//! In color mode each glyph is paired with the RGB of the resized,
//! opaque source pixel at the same grid position. The color comes from
//! the image before grayscale conversion, never from the quantized
//! intensity.

use crate::AsciiResult;
use lumaglyph_core::{Error, Pix, PixelDepth};

/// One glyph with an optional color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Option<(u8, u8, u8)>,
}

/// A glyph placed on the grid with its sampled color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredGlyph {
    pub row: u32,
    pub col: u32,
    pub ch: char,
    pub rgb: (u8, u8, u8),
}

/// Row-major grid of glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphGrid {
    width: u32,
    height: u32,
    glyphs: Vec<Glyph>,
}

impl GlyphGrid {
    /// Build a grid from row-major glyphs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] (wrapped as
    /// [`crate::AsciiError::Core`]) if the glyph count is not
    /// `width * height`.
    pub fn new(width: u32, height: u32, glyphs: Vec<Glyph>) -> AsciiResult<Self> {
        if glyphs.len() != width as usize * height as usize {
            return Err(Error::InvalidDimension { width, height }.into());
        }
        Ok(GlyphGrid {
            width,
            height,
            glyphs,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, col: u32, row: u32) -> Option<&Glyph> {
        if col < self.width && row < self.height {
            self.glyphs.get((row * self.width + col) as usize)
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.glyphs.chunks(self.width as usize)
    }

    /// Every glyph that carries a color, with its grid position.
    pub fn colored_glyphs(&self) -> impl Iterator<Item = ColoredGlyph> + '_ {
        self.glyphs.iter().enumerate().filter_map(|(i, g)| {
            g.color.map(|rgb| ColoredGlyph {
                row: i as u32 / self.width,
                col: i as u32 % self.width,
                ch: g.ch,
                rgb,
            })
        })
    }
}

/// Pair each glyph with the color of the matching pixel of `rgb`.
///
/// `glyphs` is row-major with the same dimensions as `rgb`, which must
/// be 32 bpp.
pub fn sample_colors(glyphs: &[char], rgb: &Pix) -> AsciiResult<GlyphGrid> {
    if rgb.depth() != PixelDepth::Bit32 {
        return Err(Error::UnsupportedDepth(rgb.depth().bits()).into());
    }
    let (w, h) = rgb.dimensions();
    if glyphs.len() != w as usize * h as usize {
        return Err(Error::InvalidDimension {
            width: w,
            height: h,
        }
        .into());
    }
    let out = glyphs
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            let x = (i % w as usize) as u32;
            let y = (i / w as usize) as u32;
            Glyph {
                ch,
                color: rgb.get_rgb(x, y),
            }
        })
        .collect();
    GlyphGrid::new(w, h, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AsciiError;
    use lumaglyph_core::PixMut;

    #[test]
    fn test_sample_positions() {
        let mut pm = PixMut::new(2, 2, PixelDepth::Bit32).unwrap();
        pm.set_rgb(0, 0, 1, 0, 0).unwrap();
        pm.set_rgb(1, 0, 2, 0, 0).unwrap();
        pm.set_rgb(0, 1, 3, 0, 0).unwrap();
        pm.set_rgb(1, 1, 4, 0, 0).unwrap();
        let pix: Pix = pm.into();
        let grid = sample_colors(&['a', 'b', 'c', 'd'], &pix).unwrap();
        assert_eq!(grid.get(0, 1).unwrap().ch, 'c');
        let colored: Vec<ColoredGlyph> = grid.colored_glyphs().collect();
        assert_eq!(colored.len(), 4);
        assert_eq!(
            colored[3],
            ColoredGlyph {
                row: 1,
                col: 1,
                ch: 'd',
                rgb: (4, 0, 0)
            }
        );
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    fn test_mismatched_glyph_count() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        for glyphs in [&['a', 'b', 'c'][..], &['a'; 5][..]] {
            assert!(matches!(
                sample_colors(glyphs, &pix),
                Err(AsciiError::Core(Error::InvalidDimension {
                    width: 2,
                    height: 2
                }))
            ));
        }
        let gray = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            sample_colors(&['a'; 4], &gray),
            Err(AsciiError::Core(Error::UnsupportedDepth(8)))
        ));
    }

    #[test]
    fn test_grid_rejects_wrong_count() {
        let glyph = Glyph { ch: 'x', color: None };
        assert!(matches!(
            GlyphGrid::new(3, 1, vec![glyph; 2]),
            Err(AsciiError::Core(Error::InvalidDimension {
                width: 3,
                height: 1
            }))
        ));
    }
}
