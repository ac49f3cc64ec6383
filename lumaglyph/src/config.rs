//! Settings files
//!
//! A settings file is a TOML document with the fields of [`Settings`] at
//! the top level. Missing fields keep their defaults.
//!
//! ```toml
//! width = 160
//! char_set = "Blocks"
//! effects = "dramatic"
//! remove_bg = true
//! ```

use lumaglyph_ascii::Settings;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load settings from `path`, or the defaults when no path is given.
///
/// A path that is given but cannot be read is an error. The result is
/// not validated; command-line overrides are applied first.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Parse settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}
