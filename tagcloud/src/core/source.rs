// src/core/source.rs
use glob::Pattern;
use log::{debug, warn};
use std::fs::File;
use std::io::Read as _;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::counter::{FrequencyMap, count_words};
use crate::core::separators::SeparatorSet;
use crate::core::tokenizer::words;
use crate::error::{Result, TagCloudError};
use crate::utils::is_hidden;

/// File name pattern used to pick corpus files when the input is a directory.
pub const DEFAULT_INCLUDE: &str = "*.txt";

/// Reads a whole input file into memory. Invalid UTF-8 is replaced rather than
/// rejected.
///
/// # Errors
///
/// * `InputOpen` if the file cannot be opened
/// * `InputRead` if reading fails part way
pub fn read_document(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| TagCloudError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| TagCloudError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
}

/// Lists the non-hidden regular files under `dir` whose file name matches
/// `include`, in file name order.
///
/// # Errors
///
/// * `InvalidPattern` if `include` is not a valid glob
/// * `Walk` if `dir` itself cannot be opened
///
/// Entries below `dir` that cannot be read (broken links, permission errors)
/// are logged and skipped.
pub fn collect_documents(dir: &Path, include: &str) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(include).map_err(|source| TagCloudError::InvalidPattern {
        pattern: include.to_owned(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                warn!(
                    "Skipping {}: {err}",
                    err.path().map_or_else(|| dir.display().to_string(), |p| p.display().to_string())
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name));
        if matches {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Counts every word of every corpus file under `dir` into one map.
///
/// Files that cannot be read are logged and skipped.
///
/// # Errors
///
/// See [`collect_documents`].
pub fn count_corpus(dir: &Path, include: &str, separators: &SeparatorSet) -> Result<FrequencyMap> {
    let files = collect_documents(dir, include)?;
    debug!("Found {} files matching {include} in {}", files.len(), dir.display());

    let mut frequencies = FrequencyMap::new();
    for path in files {
        match read_document(&path) {
            Ok(text) => frequencies.merge(count_words(words(&text, separators))),
            Err(err) => warn!("Skipping {}: {err}", path.display()),
        }
    }
    Ok(frequencies)
}
