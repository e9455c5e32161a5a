use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_corpus() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "a.txt", "alpha beta")?;
    create_test_file(&dir, "b.txt", "alpha, gamma!")?;
    create_test_file(&dir, "nested/c.txt", "alpha beta")?;
    create_test_file(&dir, "notes.md", "notes are not text files")?;
    create_test_file(&dir, ".hidden.txt", "hidden hidden")?;
    create_test_file(&dir, ".cache/d.txt", "hidden")?;

    Ok(dir)
}
