// tests/integration_tests/edge_cases_test.rs
use super::common::{args, create_test_file, spans};
use anyhow::Result;
use std::fs;
use tagcloud::TagCloudError;
use tempfile::TempDir;

#[test]
fn test_missing_input_is_an_input_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("missing.txt");
    let output = temp_dir.path().join("cloud.html");

    let err = tagcloud::run(args(&input, &output, 5)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TagCloudError>(),
        Some(TagCloudError::InputOpen { .. })
    ));
    assert!(!output.exists(), "nothing should be written on input failure");
    Ok(())
}

#[test]
fn test_unwritable_output_is_an_output_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "story.txt", "some words here")?;
    let output = temp_dir.path().join("no_such_dir/cloud.html");

    let err = tagcloud::run(args(&input, &output, 5)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TagCloudError>(),
        Some(TagCloudError::OutputWrite { .. })
    ));
    Ok(())
}

#[test]
fn test_only_separators() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "punct.txt", " ,.!?\n\n\t-- ()[];:/'")?;
    let output = temp_dir.path().join("cloud.html");

    tagcloud::run(args(&input, &output, 5))?;

    let html = fs::read_to_string(&output)?;
    assert!(spans(&html).is_empty());
    Ok(())
}

#[test]
fn test_all_words_equally_frequent() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "flat.txt", "red green blue\nblue green red")?;
    let output = temp_dir.path().join("cloud.html");

    tagcloud::run(args(&input, &output, 2))?;

    let html = fs::read_to_string(&output)?;
    let found = spans(&html);
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|(class, count, _)| class == "f11" && *count == 2));
    Ok(())
}

#[test]
fn test_markup_in_words_is_escaped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "markup.txt", "<b> <b> R&D")?;
    let output = temp_dir.path().join("cloud.html");

    tagcloud::run(args(&input, &output, 5))?;

    let html = fs::read_to_string(&output)?;
    let words: Vec<String> = spans(&html).into_iter().map(|(_, _, w)| w).collect();
    assert_eq!(words, vec!["&lt;b&gt;", "R&amp;D"]);
    Ok(())
}

#[test]
fn test_windows_line_endings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "crlf.txt", "one\r\ntwo\r\none\r\n")?;
    let output = temp_dir.path().join("cloud.html");

    tagcloud::run(args(&input, &output, 5))?;

    let html = fs::read_to_string(&output)?;
    assert_eq!(
        spans(&html),
        vec![
            ("f48".to_owned(), 2, "one".to_owned()),
            ("f11".to_owned(), 1, "two".to_owned()),
        ]
    );
    Ok(())
}
