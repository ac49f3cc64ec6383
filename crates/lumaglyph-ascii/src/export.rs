//! Renderers for finished glyph art
//!
//! Plain text and Markdown use the formatted canvas. HTML and ANSI use
//! the colored grid when the conversion produced one and fall back to
//! the canvas otherwise.

use crate::AsciiError;
use crate::pipeline::AsciiArt;
use crate::sampler::GlyphGrid;
use crate::settings::Settings;
use std::fmt::Write as _;
use std::path::Path;

/// Page colors and font for HTML output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HtmlTheme {
    #[default]
    Matrix,
    Terminal,
    Retro,
    Paper,
}

impl HtmlTheme {
    pub const ALL: [HtmlTheme; 4] = [
        HtmlTheme::Matrix,
        HtmlTheme::Terminal,
        HtmlTheme::Retro,
        HtmlTheme::Paper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HtmlTheme::Matrix => "matrix",
            HtmlTheme::Terminal => "terminal",
            HtmlTheme::Retro => "retro",
            HtmlTheme::Paper => "paper",
        }
    }

    /// Background color, foreground color, font family.
    fn style(self) -> (&'static str, &'static str, &'static str) {
        match self {
            HtmlTheme::Matrix => ("#000000", "#00ff00", "Courier New"),
            HtmlTheme::Terminal => ("#1e1e1e", "#ffffff", "Consolas"),
            HtmlTheme::Retro => ("#000080", "#ffff00", "monospace"),
            HtmlTheme::Paper => ("#f5f5f5", "#000000", "Courier New"),
        }
    }
}

impl std::str::FromStr for HtmlTheme {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HtmlTheme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AsciiError::InvalidSettings(format!("unknown HTML theme: {}", s)))
    }
}

/// Output file flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
    Html,
    Ansi,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Text,
        ExportFormat::Markdown,
        ExportFormat::Html,
        ExportFormat::Ansi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Html => "html",
            ExportFormat::Ansi => "ansi",
        }
    }

    /// Guess the format from a file extension; unknown extensions are text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ExportFormat {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("md" | "markdown") => ExportFormat::Markdown,
            Some("html" | "htm") => ExportFormat::Html,
            Some("ans") => ExportFormat::Ansi,
            _ => ExportFormat::Text,
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AsciiError::InvalidSettings(format!("unknown export format: {}", s)))
    }
}

/// Render `art` in the requested format.
pub fn render(
    art: &AsciiArt,
    format: ExportFormat,
    theme: HtmlTheme,
    settings: &Settings,
) -> String {
    match format {
        ExportFormat::Text => render_text(art),
        ExportFormat::Markdown => render_markdown(art),
        ExportFormat::Html => render_html(art, theme),
        ExportFormat::Ansi => render_ansi(art, settings),
    }
}

/// The canvas text with a final newline.
pub fn render_text(art: &AsciiArt) -> String {
    let mut out = art.text();
    out.push('\n');
    out
}

/// The canvas text in a fenced code block.
pub fn render_markdown(art: &AsciiArt) -> String {
    format!("```text\n{}\n```\n", art.text())
}

/// A standalone HTML page.
///
/// Colored art becomes one `<span>` per glyph with a `<br>` after each
/// grid row; monochrome art is wrapped in `<pre>`.
pub fn render_html(art: &AsciiArt, theme: HtmlTheme) -> String {
    let body = match art.colored() {
        Some(grid) => html_spans(grid),
        None => format!("<pre>{}</pre>", escape_html(&art.text())),
    };
    let (bg, fg, font) = theme.style();
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <title>ASCII Art</title>
    <style>
        body {{ background: {bg}; color: {fg}; font-family: '{font}', monospace; white-space: pre; line-height: 1; font-size: 10px; }}
    </style>
</head>
<body>{body}</body>
</html>
"
    )
}

fn html_spans(grid: &GlyphGrid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for g in row {
            let (r, gr, b) = g.color.unwrap_or((255, 255, 255));
            let text = if g.ch == ' ' {
                "&nbsp;".to_string()
            } else {
                escape_html(&g.ch.to_string())
            };
            let _ = write!(
                out,
                "<span style=\"color:#{:02x}{:02x}{:02x};\">{}</span>",
                r, gr, b, text
            );
        }
        out.push_str("<br>");
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// 24-bit color terminal output.
///
/// Each glyph of a colored grid is printed in its sampled color, doubled
/// when `double_width` is set and followed by a blank when `add_spacing`
/// is set. Monochrome art is printed as plain text.
pub fn render_ansi(art: &AsciiArt, settings: &Settings) -> String {
    let Some(grid) = art.colored() else {
        return render_text(art);
    };
    let mut out = String::new();
    for row in grid.rows() {
        for g in row {
            let mut cell = String::with_capacity(3);
            cell.push(g.ch);
            if settings.double_width {
                cell.push(g.ch);
            }
            if settings.add_spacing {
                cell.push(' ');
            }
            match g.color {
                Some((r, gr, b)) => {
                    let _ = write!(out, "\x1b[38;2;{};{};{}m{}", r, gr, b, cell);
                }
                None => out.push_str(&cell),
            }
        }
        out.push_str("\x1b[0m\n");
    }
    out
}
