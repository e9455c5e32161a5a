// src/lib.rs
//! Builds an HTML tag cloud from the most frequent words of a text.
//!
//! The pipeline is tokenize → count → rank → scale → render. Everything up to
//! rendering is pure; [`cli::run`] owns all file and console I/O.
//!
//! ```
//! use tagcloud::{Settings, generate};
//!
//! let settings = Settings { top: 2, ..Settings::default() };
//! let cloud = generate("go go stop", "inline", &settings);
//! let words: Vec<&str> = cloud.entries.iter().map(|e| e.word.as_str()).collect();
//! assert_eq!(words, vec!["go", "stop"]);
//! ```
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use config::Config;
pub use crate::core::counter::{FrequencyMap, count_words};
pub use crate::core::pipeline::{Settings, generate, generate_from_counts};
pub use crate::core::ranker::{Ranking, rank};
pub use crate::core::render::{RenderOptions, render_html, render_to_string};
pub use crate::core::scaler::FontScale;
pub use crate::core::separators::SeparatorSet;
pub use crate::core::tokenizer::{next_word_or_separator, tokenize, words};
pub use error::TagCloudError;
pub use models::{CloudEntry, CountBounds, TagCloud, WordCount};
