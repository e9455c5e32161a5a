// src/config.rs
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::render::RenderOptions;
use crate::core::scaler::{DEFAULT_MAX_FONT, DEFAULT_MIN_FONT, FontScale};
use crate::core::separators::{DEFAULT_SEPARATORS, SeparatorSet};
use crate::core::source::DEFAULT_INCLUDE;
use crate::error::{Result, TagCloudError};

pub const CONFIG_FILE_NAME: &str = ".tagcloud.toml";

/// Contents of a `.tagcloud.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub separators: Option<String>,
    pub stylesheets: Option<Vec<String>>,
    pub include: Option<String>,
    #[serde(default)]
    pub font: FontConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl Config {
    #[must_use]
    pub fn separator_set(&self) -> SeparatorSet {
        SeparatorSet::new(self.separators.as_deref().unwrap_or(DEFAULT_SEPARATORS))
    }

    /// # Errors
    ///
    /// Returns `InvalidFontRange` if the configured minimum exceeds the maximum.
    pub fn font_scale(&self) -> Result<FontScale> {
        FontScale::new(
            self.font.min.unwrap_or(DEFAULT_MIN_FONT),
            self.font.max.unwrap_or(DEFAULT_MAX_FONT),
        )
    }

    #[must_use]
    pub fn include(&self) -> &str {
        self.include.as_deref().unwrap_or(DEFAULT_INCLUDE)
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        self.stylesheets
            .clone()
            .map_or_else(RenderOptions::default, |stylesheets| RenderOptions { stylesheets })
    }
}

/// Parses config text. `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `ConfigParse` for malformed TOML or unknown keys.
pub fn parse_config(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|source| TagCloudError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// # Errors
///
/// Returns `ConfigRead` if the file cannot be read, or `ConfigParse` if it is
/// not a valid config.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| TagCloudError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

/// Looks for `.tagcloud.toml` in `dir` and then in each parent directory,
/// returning the first one found.
#[must_use]
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the nearest config above `dir`, or the defaults if there is none.
///
/// # Errors
///
/// See [`load_config_file`].
pub fn load_config(dir: &Path) -> Result<Config> {
    match find_config(dir) {
        Some(path) => {
            debug!("Using config file {}", path.display());
            load_config_file(&path)
        }
        None => Ok(Config::default()),
    }
}
