//! Command-line interface
//!
//! Options given on the command line override the settings file, which
//! overrides the defaults.

use clap::{ArgAction, Parser};
use log::LevelFilter;
use lumaglyph_ascii::export::{ExportFormat, HtmlTheme};
use lumaglyph_ascii::{CharSet, ColorChannel, Effect, GrayMode, Settings};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Parse any named option through its `FromStr` impl
fn parse_named<T>(s: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    s.parse::<T>().map_err(|e| e.to_string())
}

/// Resolve a `--x`/`--no-x` pair; clap keeps at most one of them set.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Debug, Parser)]
#[command(name = "lumaglyph")]
#[command(version, about = "Convert images into glyph art")]
#[command(after_help = "EXAMPLES:
    # Print a 100-column rendering
    lumaglyph photo.jpg --width 100

    # Cut the background and save a colored HTML page
    lumaglyph logo.png --remove-bg --color -o logo.html --theme paper

    # Use a settings file and keep the resized image
    lumaglyph photo.jpg -c lumaglyph.toml --preview small.png")]
pub struct Cli {
    /// Image to convert (PNG, JPEG, GIF, WebP, TIFF or BMP)
    pub input: PathBuf,

    /// TOML settings file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output format: text, markdown, html or ansi (default: from the
    /// output extension)
    #[arg(long, short = 'f', value_parser = parse_named::<ExportFormat>)]
    pub format: Option<ExportFormat>,

    /// HTML theme: matrix, terminal, retro or paper
    #[arg(long, value_parser = parse_named::<HtmlTheme>, default_value = "matrix")]
    pub theme: HtmlTheme,

    /// Save the resized image as PNG
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Output width in characters (50-500)
    #[arg(long, short = 'w')]
    pub width: Option<u32>,

    #[arg(long)]
    pub brightness: Option<f32>,

    #[arg(long)]
    pub contrast: Option<f32>,

    #[arg(long)]
    pub sharpness: Option<f32>,

    #[arg(long)]
    pub saturation: Option<f32>,

    /// Character set: Detailed, Classic, Blocks, Lines, Dots or Braille
    #[arg(long, value_parser = parse_named::<CharSet>)]
    pub charset: Option<CharSet>,

    /// Effect: none, enhance, smooth, edge, artistic or dramatic
    #[arg(long, value_parser = parse_named::<Effect>)]
    pub effect: Option<Effect>,

    /// Remove a uniform background
    #[arg(long, overrides_with = "no_remove_bg")]
    pub remove_bg: bool,

    #[arg(long, overrides_with = "remove_bg")]
    pub no_remove_bg: bool,

    #[arg(long)]
    pub bg_threshold: Option<u32>,

    #[arg(long)]
    pub bg_feather: Option<u32>,

    /// Equalize intensities before mapping
    #[arg(long, overrides_with = "no_adaptive")]
    pub adaptive: bool,

    /// Skip histogram equalization
    #[arg(long, overrides_with = "adaptive")]
    pub no_adaptive: bool,

    #[arg(long, overrides_with = "no_preserve_detail")]
    pub preserve_detail: bool,

    /// Skip sharpening before downscaling
    #[arg(long, overrides_with = "preserve_detail")]
    pub no_preserve_detail: bool,

    #[arg(long, overrides_with = "no_aspect_correction")]
    pub aspect_correction: bool,

    /// Keep square cells instead of squashing rows
    #[arg(long, overrides_with = "aspect_correction")]
    pub no_aspect_correction: bool,

    #[arg(long, overrides_with = "no_smart_background")]
    pub smart_background: bool,

    /// Composite transparency over white instead of a contrasting color
    #[arg(long, overrides_with = "smart_background")]
    pub no_smart_background: bool,

    /// Grayscale mode: weighted, desaturate or channel
    #[arg(long, value_parser = parse_named::<GrayMode>)]
    pub gray_mode: Option<GrayMode>,

    /// Channel for the channel grayscale mode: red, green or blue
    #[arg(long, value_parser = parse_named::<ColorChannel>)]
    pub channel: Option<ColorChannel>,

    #[arg(long, overrides_with = "no_double_width")]
    pub double_width: bool,

    #[arg(long, overrides_with = "double_width")]
    pub no_double_width: bool,

    #[arg(long, overrides_with = "no_spacing")]
    pub spacing: bool,

    #[arg(long, overrides_with = "spacing")]
    pub no_spacing: bool,

    /// Swap light and dark glyphs
    #[arg(long, overrides_with = "no_reverse")]
    pub reverse: bool,

    #[arg(long, overrides_with = "reverse")]
    pub no_reverse: bool,

    #[arg(long, overrides_with = "no_border")]
    pub border: bool,

    #[arg(long, overrides_with = "border")]
    pub no_border: bool,

    #[arg(long)]
    pub border_char: Option<char>,

    /// Sample a color for every glyph
    #[arg(long, overrides_with = "no_color")]
    pub color: bool,

    #[arg(long, overrides_with = "color")]
    pub no_color: bool,
}

impl Cli {
    /// Log filter for the verbosity count.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Write every option given on the command line into `settings`.
    ///
    /// Each switch comes as a `--x`/`--no-x` pair; the last one given
    /// wins and neither leaves the setting alone.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(v) = self.width {
            settings.width = v;
        }
        if let Some(v) = self.brightness {
            settings.brightness = v;
        }
        if let Some(v) = self.contrast {
            settings.contrast = v;
        }
        if let Some(v) = self.sharpness {
            settings.sharpness = v;
        }
        if let Some(v) = self.saturation {
            settings.saturation = v;
        }
        if let Some(v) = self.charset {
            settings.char_set = v;
        }
        if let Some(v) = self.effect {
            settings.effects = v;
        }
        if let Some(v) = self.bg_threshold {
            settings.bg_threshold = v;
        }
        if let Some(v) = self.bg_feather {
            settings.bg_feather = v;
        }
        if let Some(v) = self.gray_mode {
            settings.color_mode = v;
        }
        if let Some(v) = self.channel {
            settings.color_channel = v;
        }
        if let Some(v) = self.border_char {
            settings.border_char = v;
        }

        let switches = [
            (&mut settings.remove_bg, self.remove_bg, self.no_remove_bg),
            (&mut settings.adaptive, self.adaptive, self.no_adaptive),
            (
                &mut settings.preserve_detail,
                self.preserve_detail,
                self.no_preserve_detail,
            ),
            (
                &mut settings.aspect_correction,
                self.aspect_correction,
                self.no_aspect_correction,
            ),
            (
                &mut settings.smart_background,
                self.smart_background,
                self.no_smart_background,
            ),
            (&mut settings.double_width, self.double_width, self.no_double_width),
            (&mut settings.add_spacing, self.spacing, self.no_spacing),
            (&mut settings.reverse_colors, self.reverse, self.no_reverse),
            (&mut settings.add_border, self.border, self.no_border),
            (&mut settings.color_ascii, self.color, self.no_color),
        ];
        for (setting, on, off) in switches {
            if let Some(v) = switch(on, off) {
                *setting = v;
            }
        }
    }

    /// Output format: the explicit choice, else the output extension,
    /// else ANSI for colored output and text otherwise.
    pub fn export_format(&self, settings: &Settings) -> ExportFormat {
        if let Some(f) = self.format {
            return f;
        }
        match &self.output {
            Some(path) => ExportFormat::from_path(path),
            None if settings.color_ascii => ExportFormat::Ansi,
            None => ExportFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "lumaglyph",
            "in.png",
            "-w",
            "80",
            "--charset",
            "blocks",
            "--effect",
            "Artistic",
            "--no-adaptive",
            "--reverse",
            "--gray-mode",
            "channel",
            "--channel",
            "green",
        ]);
        let mut s = Settings::default();
        cli.apply_overrides(&mut s);
        assert_eq!(s.width, 80);
        assert_eq!(s.char_set, CharSet::Blocks);
        assert_eq!(s.effects, Effect::Artistic);
        assert_eq!(s.color_mode, GrayMode::Channel);
        assert_eq!(s.color_channel, ColorChannel::Green);
        assert!(!s.adaptive);
        assert!(s.reverse_colors);
        assert!(s.preserve_detail);
    }

    #[test]
    fn test_untouched_settings_survive() {
        let cli = Cli::parse_from(["lumaglyph", "in.png"]);
        let mut s = Settings {
            width: 300,
            adaptive: false,
            ..Default::default()
        };
        cli.apply_overrides(&mut s);
        assert_eq!(s.width, 300);
        assert!(!s.adaptive);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_negated_flags_override_file() {
        let mut s = Settings {
            remove_bg: true,
            add_border: true,
            color_ascii: true,
            adaptive: false,
            ..Default::default()
        };
        let cli = Cli::parse_from([
            "lumaglyph",
            "in.png",
            "--no-remove-bg",
            "--no-border",
            "--adaptive",
            "--color",
            "--no-color",
        ]);
        cli.apply_overrides(&mut s);
        assert!(!s.remove_bg);
        assert!(!s.add_border);
        assert!(s.adaptive);
        assert!(!s.color_ascii);
        assert!(s.preserve_detail);
    }

    #[test]
    fn test_switch_pairs() {
        assert_eq!(switch(false, false), None);
        assert_eq!(switch(true, false), Some(true));
        assert_eq!(switch(false, true), Some(false));
    }

    #[test]
    fn test_export_format_choice() {
        let s = Settings::default();
        let cli = Cli::parse_from(["lumaglyph", "in.png", "-o", "out.html"]);
        assert_eq!(cli.export_format(&s), ExportFormat::Html);
        let cli = Cli::parse_from(["lumaglyph", "in.png", "-o", "out.html", "-f", "markdown"]);
        assert_eq!(cli.export_format(&s), ExportFormat::Markdown);
        let cli = Cli::parse_from(["lumaglyph", "in.png", "--color", "-vv"]);
        let mut colored = Settings::default();
        cli.apply_overrides(&mut colored);
        assert_eq!(cli.export_format(&colored), ExportFormat::Ansi);
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_bad_names_rejected() {
        assert!(Cli::try_parse_from(["lumaglyph", "in.png", "--charset", "emoji"]).is_err());
        assert!(Cli::try_parse_from(["lumaglyph", "in.png", "--theme", "neon"]).is_err());
    }
}
