//! Text layout of the glyph stream
//!
//! The glyph stream is cut into rows of the grid width. Each row is then
//! rewritten in a fixed order: doubling, spacing, palette reversal. An
//! optional border wraps the finished rows.

use crate::palette::Palette;
use crate::settings::Settings;

/// Finished rows of text, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiCanvas {
    rows: Vec<String>,
}

impl AsciiCanvas {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Rows joined by `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }

    /// Number of text lines.
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of characters in [`to_text`](Self::to_text), newlines included.
    pub fn char_count(&self) -> usize {
        let glyphs: usize = self.rows.iter().map(|r| r.chars().count()).sum();
        glyphs + self.rows.len().saturating_sub(1)
    }
}

/// Row layout options taken from [`Settings`].
#[derive(Debug, Clone)]
pub struct Formatter<'a> {
    palette: &'a Palette,
    double_width: bool,
    add_spacing: bool,
    reverse_colors: bool,
    border: Option<char>,
}

impl<'a> Formatter<'a> {
    pub fn new(settings: &Settings, palette: &'a Palette) -> Self {
        Formatter {
            palette,
            double_width: settings.double_width,
            add_spacing: settings.add_spacing,
            reverse_colors: settings.reverse_colors,
            border: settings.add_border.then_some(settings.border_char),
        }
    }

    /// Apply doubling, then spacing, then reversal to one row.
    pub fn format_row(&self, row: &[char]) -> String {
        let mut chars: Vec<char> = row.to_vec();
        if self.double_width {
            chars = chars.iter().flat_map(|&c| [c, c]).collect();
        }
        if self.add_spacing {
            let mut spaced = Vec::with_capacity(chars.len() * 2);
            for (i, &c) in chars.iter().enumerate() {
                if i > 0 {
                    spaced.push(' ');
                }
                spaced.push(c);
            }
            chars = spaced;
        }
        if self.reverse_colors {
            for c in &mut chars {
                *c = self.palette.reverse(*c);
            }
        }
        chars.into_iter().collect()
    }

    /// Lay out a row-major glyph stream `width` glyphs per row.
    ///
    /// A trailing partial row is padded with the lightest glyph.
    pub fn format(&self, glyphs: &[char], width: usize) -> AsciiCanvas {
        let mut rows: Vec<String> = glyphs
            .chunks(width.max(1))
            .map(|chunk| {
                if chunk.len() < width {
                    let mut padded = chunk.to_vec();
                    padded.resize(width, self.palette.lightest());
                    self.format_row(&padded)
                } else {
                    self.format_row(chunk)
                }
            })
            .collect();

        if let Some(b) = self.border {
            rows = add_border(&rows, b);
        }
        AsciiCanvas { rows }
    }
}

/// Wrap rows in a frame of `border` characters.
///
/// Rows are right-padded with spaces to the longest row (counted in
/// characters); the top and bottom rules are four characters wider.
pub fn add_border(rows: &[String], border: char) -> Vec<String> {
    let max_len = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let rule: String = std::iter::repeat_n(border, max_len + 4).collect();

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(rule.clone());
    for row in rows {
        let pad = max_len - row.chars().count();
        out.push(format!("{} {}{} {}", border, row, " ".repeat(pad), border));
    }
    out.push(rule);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::CharSet;

    fn settings(f: impl FnOnce(&mut Settings)) -> Settings {
        let mut s = Settings::default();
        f(&mut s);
        s
    }

    #[test]
    fn test_plain_rows() {
        let p = Palette::new(CharSet::Classic);
        let s = Settings::default();
        let canvas = Formatter::new(&s, &p).format(&['@', '#', '.', ' ', '%', '*'], 3);
        assert_eq!(canvas.to_text(), "@#.\n %*");
        assert_eq!(canvas.line_count(), 2);
        assert_eq!(canvas.char_count(), 7);
    }

    #[test]
    fn test_row_order_double_space_reverse() {
        let p = Palette::new(CharSet::Classic);
        let s = settings(|s| {
            s.double_width = true;
            s.add_spacing = true;
            s.reverse_colors = true;
        });
        // Doubling, then spacing, then reversal turns the inserted
        // blanks into the darkest glyph.
        let row = Formatter::new(&s, &p).format_row(&['@', 'x']);
        assert_eq!(row, " @ @x@x");
    }

    #[test]
    fn test_partial_row_padded_with_lightest() {
        let p = Palette::new(CharSet::Blocks);
        let s = Settings::default();
        let canvas = Formatter::new(&s, &p).format(&['█', '▓', '▒', '░'], 3);
        assert_eq!(canvas.rows()[1], "░  ");
    }

    #[test]
    fn test_border_layout() {
        let p = Palette::new(CharSet::Classic);
        let s = settings(|s| {
            s.add_border = true;
            s.border_char = '*';
        });
        let glyphs = vec!['#'; 30];
        let canvas = Formatter::new(&s, &p).format(&glyphs, 10);
        let rows = canvas.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "*".repeat(14));
        assert_eq!(rows[4], rows[0]);
        for row in &rows[1..4] {
            assert_eq!(row, &format!("* {} *", "#".repeat(10)));
        }
    }

    #[test]
    fn test_border_pads_short_rows() {
        let rows = vec!["ab".to_string(), "abcd".to_string(), String::new()];
        let framed = add_border(&rows, '█');
        assert_eq!(framed[1], "█ ab   █");
        assert_eq!(framed[2], "█ abcd █");
        assert_eq!(framed[3], "█      █");
        assert_eq!(framed[0].chars().count(), 8);
    }
}
