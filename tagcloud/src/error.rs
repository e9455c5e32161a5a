// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while acquiring input, loading configuration or writing the
/// generated HTML.
#[derive(Error, Debug)]
pub enum TagCloudError {
    #[error("Failed to open input {}: {source}", .path.display())]
    InputOpen { path: PathBuf, source: io::Error },

    #[error("Failed to read input {}: {source}", .path.display())]
    InputRead { path: PathBuf, source: io::Error },

    #[error("Failed to write output {}: {source}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid font range: min {min} is greater than max {max}")]
    InvalidFontRange { min: u32, max: u32 },

    #[error("Invalid include pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to walk input directory: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, TagCloudError>;
