use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use lumaglyph::ascii::{convert_bytes, render};
use lumaglyph::cli::Cli;
use lumaglyph::config::load_settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level().as_str()),
    )
    .init();

    let mut settings = load_settings(cli.config.as_deref())?;
    cli.apply_overrides(&mut settings);
    settings.validate().context("invalid settings")?;

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let art = convert_bytes(&bytes, &settings)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    if let Some(preview) = &cli.preview {
        lumaglyph::io::write_png_file(art.processed(), preview)
            .with_context(|| format!("failed to write preview {}", preview.display()))?;
        info!("wrote preview to {}", preview.display());
    }

    let format = cli.export_format(&settings);
    let rendered = render(&art, format, cli.theme, &settings);
    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            let stats = art.stats();
            info!(
                "saved {} ({} lines, {} characters) to {}",
                format.name(),
                stats.lines,
                stats.chars,
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
