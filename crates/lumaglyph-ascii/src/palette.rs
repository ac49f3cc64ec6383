//! Glyph palettes
//!
//! A palette is an ordered run of unique glyphs from darkest (most ink)
//! to lightest (usually a blank). Palettes are chosen by name from a
//! fixed catalog. Each palette keeps a reverse map from glyph to index
//! so that light/dark reversal is a constant-time lookup.

use crate::{AsciiError, AsciiResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Names of the built-in palettes.
///
/// Settings files name them the same way the command line does: any
/// ASCII case, with unknown names reported as
/// [`AsciiError::UnknownPalette`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CharSet {
    #[default]
    Detailed,
    Classic,
    Blocks,
    Lines,
    Dots,
    Braille,
}

impl CharSet {
    /// Every catalog entry in display order.
    pub const ALL: [CharSet; 6] = [
        CharSet::Detailed,
        CharSet::Classic,
        CharSet::Blocks,
        CharSet::Lines,
        CharSet::Dots,
        CharSet::Braille,
    ];

    /// Catalog name.
    pub fn name(self) -> &'static str {
        match self {
            CharSet::Detailed => "Detailed",
            CharSet::Classic => "Classic",
            CharSet::Blocks => "Blocks",
            CharSet::Lines => "Lines",
            CharSet::Dots => "Dots",
            CharSet::Braille => "Braille",
        }
    }

    /// Glyphs from darkest to lightest.
    pub fn glyphs(self) -> &'static str {
        match self {
            CharSet::Detailed => "█▉▊▋▌▍▎▏ ",
            CharSet::Classic => "@%#*+=-:. ",
            CharSet::Blocks => "█▓▒░ ",
            CharSet::Lines => "≡+=:-. ",
            CharSet::Dots => "●◐◑◒◓○⚬⚪ ",
            CharSet::Braille => "⣿⣾⣽⣻⣟⣯⣷⣶⣴⣲⣱⣰⣠⣀ ",
        }
    }

    /// Look up a catalog entry by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> AsciiResult<CharSet> {
        CharSet::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| AsciiError::UnknownPalette(name.to_string()))
    }
}

impl std::fmt::Display for CharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for CharSet {
    type Error = AsciiError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        CharSet::from_name(&name)
    }
}

impl From<CharSet> for String {
    fn from(set: CharSet) -> String {
        set.name().to_string()
    }
}

impl std::str::FromStr for CharSet {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharSet::from_name(s)
    }
}

/// An ordered glyph palette with a reverse lookup map.
#[derive(Debug, Clone)]
pub struct Palette {
    set: CharSet,
    glyphs: Vec<char>,
    index: HashMap<char, usize>,
}

impl Palette {
    /// Build the palette for a catalog entry.
    pub fn new(set: CharSet) -> Self {
        let glyphs: Vec<char> = set.glyphs().chars().collect();
        let index = glyphs.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Palette { set, glyphs, index }
    }

    /// Build a palette from a catalog name.
    pub fn by_name(name: &str) -> AsciiResult<Self> {
        Ok(Self::new(CharSet::from_name(name)?))
    }

    /// Catalog entry this palette was built from.
    pub fn char_set(&self) -> CharSet {
        self.set
    }

    /// Number of glyphs.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; catalog palettes hold at least two glyphs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphs from darkest to lightest.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Glyph at `index`, clipped to the last glyph.
    #[inline]
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }

    /// The darkest glyph (index 0).
    pub fn darkest(&self) -> char {
        self.glyphs[0]
    }

    /// The lightest glyph (last index).
    pub fn lightest(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    /// Position of `c` in the palette.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Swap `c` with its mirror from the other end of the palette.
    ///
    /// Glyphs not in the palette are returned unchanged.
    #[inline]
    pub fn reverse(&self, c: char) -> char {
        match self.index_of(c) {
            Some(i) => self.glyphs[self.glyphs.len() - 1 - i],
            None => c,
        }
    }
}
