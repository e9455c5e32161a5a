// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, load_config, load_config_file};
use crate::core::pipeline::{Settings, generate, generate_from_counts};
use crate::core::render::{RenderOptions, render_html};
use crate::core::source::{count_corpus, read_document};
use crate::error::TagCloudError;
use crate::models::TagCloud;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to read, or a directory of text files
    pub input: PathBuf,

    /// HTML file to write (defaults to standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of most frequent words to include
    #[arg(short = 't', long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub top: u64,

    /// Smallest font size in points
    #[arg(long)]
    pub font_min: Option<u32>,

    /// Largest font size in points
    #[arg(long)]
    pub font_max: Option<u32>,

    /// Characters that separate words
    #[arg(short, long)]
    pub separators: Option<String>,

    /// File name pattern used when the input is a directory (e.g., "*.txt")
    #[arg(short, long)]
    pub include: Option<String>,

    /// Config file (defaults to the nearest .tagcloud.toml above the input)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Command-line values take precedence over the config file.
    #[must_use]
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(separators) = &self.separators {
            config.separators = Some(separators.clone());
        }
        if let Some(include) = &self.include {
            config.include = Some(include.clone());
        }
        config.font.min = self.font_min.or(config.font.min);
        config.font.max = self.font_max.or(config.font.max);
        config
    }
}

pub fn run(args: Args) -> Result<()> {
    let input = if args.input.is_absolute() {
        args.input.clone()
    } else {
        env::current_dir()?.join(&args.input)
    };

    let config = match &args.config {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => load_config(config_search_dir(&input))
            .with_context(|| format!("Failed to load config for: {}", input.display()))?,
    };
    let config = args.apply_overrides(config);

    let settings = Settings {
        separators: config.separator_set(),
        top: usize::try_from(args.top).unwrap_or(usize::MAX),
        font_scale: config.font_scale()?,
    };
    let title = args.input.display().to_string();

    let cloud = if input.is_dir() {
        let frequencies = count_corpus(&input, config.include(), &settings.separators)
            .with_context(|| format!("Failed to read directory: {}", input.display()))?;
        generate_from_counts(&frequencies, &title, &settings)
    } else {
        let text = read_document(&input)?;
        generate(&text, &title, &settings)
    };

    write_output(&cloud, &config.render_options(), args.output.as_deref())?;

    info!(
        "Wrote {} of {} distinct words ({} total) from {title}",
        cloud.len(),
        cloud.distinct_words,
        cloud.total_words
    );
    Ok(())
}

fn config_search_dir(input: &Path) -> &Path {
    if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or(input)
    }
}

/// Renders the cloud into `writer` and flushes it. `name` labels errors.
///
/// # Errors
///
/// Returns `OutputWrite` if writing or flushing fails.
pub fn write_html<W: Write>(
    cloud: &TagCloud,
    options: &RenderOptions,
    writer: &mut W,
    name: &Path,
) -> Result<(), TagCloudError> {
    let to_error = |source| TagCloudError::OutputWrite {
        path: name.to_path_buf(),
        source,
    };
    render_html(cloud, options, writer).map_err(to_error)?;
    writer.flush().map_err(to_error)
}

/// Renders the cloud to `output`, or to standard output when `None`.
///
/// # Errors
///
/// Returns `OutputWrite` if the file cannot be created, written or flushed.
pub fn write_output(
    cloud: &TagCloud,
    options: &RenderOptions,
    output: Option<&Path>,
) -> Result<(), TagCloudError> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| TagCloudError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            write_html(cloud, options, &mut BufWriter::new(file), path)
        }
        None => write_html(cloud, options, &mut io::stdout().lock(), Path::new("<stdout>")),
    }
}
