// tests/integration_tests/corpus_test.rs
use super::common::{args, create_test_file, spans};
use anyhow::Result;
use std::fs;
use tempfile::TempDir;

fn setup_corpus() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "corpus/one.txt", "rust is fast")?;
    create_test_file(temp_dir.path(), "corpus/two.txt", "rust is safe")?;
    create_test_file(temp_dir.path(), "corpus/deep/three.txt", "rust rust")?;
    create_test_file(temp_dir.path(), "corpus/readme.md", "ignored ignored ignored ignored")?;
    create_test_file(temp_dir.path(), "corpus/.draft.txt", "secret secret secret secret")?;
    Ok(temp_dir)
}

#[test]
fn test_directory_input_merges_counts() -> Result<()> {
    let temp_dir = setup_corpus()?;
    let input = temp_dir.path().join("corpus");
    let output = temp_dir.path().join("cloud.html");

    tagcloud::run(args(&input, &output, 2))?;

    let html = fs::read_to_string(&output)?;
    assert_eq!(
        spans(&html),
        vec![
            ("f23".to_owned(), 2, "is".to_owned()),
            ("f48".to_owned(), 4, "rust".to_owned()),
        ]
    );
    Ok(())
}

#[test]
fn test_directory_input_with_include_pattern() -> Result<()> {
    let temp_dir = setup_corpus()?;
    let input = temp_dir.path().join("corpus");
    let output = temp_dir.path().join("cloud.html");

    let mut run_args = args(&input, &output, 5);
    run_args.include = Some("*.md".to_owned());
    tagcloud::run(run_args)?;

    let html = fs::read_to_string(&output)?;
    assert_eq!(spans(&html), vec![("f11".to_owned(), 4, "ignored".to_owned())]);
    Ok(())
}
