// tests/integration_tests/word_counting_test.rs
use tagcloud::{SeparatorSet, count_words, next_word_or_separator, rank, words};

const TEXT: &str = "It was the best of times, it was the worst of times;\n\
                    it was the age of wisdom - it was the age of foolishness!\r\n";

#[test]
fn test_repeated_calls_partition_text() {
    let separators = SeparatorSet::default();
    let mut position = 0;
    let mut rebuilt = String::new();

    while position < TEXT.len() {
        let token = next_word_or_separator(TEXT, position, &separators);
        assert!(!token.is_empty(), "token at {position} should not be empty");
        rebuilt.push_str(token);
        position += token.len();
    }

    assert_eq!(position, TEXT.len());
    assert_eq!(rebuilt, TEXT);
}

#[test]
fn test_count_sum_equals_word_tokens() {
    let separators = SeparatorSet::default();
    let frequencies = count_words(words(TEXT, &separators));
    let word_tokens = words(TEXT, &separators).count();

    assert_eq!(frequencies.total(), u64::try_from(word_tokens).unwrap());
    assert_eq!(frequencies.get("it"), Some(3));
    assert_eq!(frequencies.get("It"), Some(1));
    assert_eq!(frequencies.get("was"), Some(4));
    assert_eq!(frequencies.get("times"), Some(2));
}

#[test]
fn test_ranked_length_and_order() {
    let separators = SeparatorSet::default();
    let frequencies = count_words(words(TEXT, &separators));

    for top in 0..=frequencies.len() + 2 {
        let ranking = rank(&frequencies, top);
        assert_eq!(ranking.entries.len(), top.min(frequencies.len()));
        for pair in ranking.entries.windows(2) {
            assert!(
                pair[0].word.to_lowercase() <= pair[1].word.to_lowercase(),
                "{} should not sort after {}",
                pair[0].word,
                pair[1].word
            );
        }
    }
}

#[test]
fn test_top_words_win_over_rare_words() {
    let separators = SeparatorSet::default();
    let frequencies = count_words(words(TEXT, &separators));
    let ranking = rank(&frequencies, 3);
    let selected: Vec<&str> = ranking.entries.iter().map(|e| e.word.as_str()).collect();

    // "was", "the" and "of" each appear four times; nothing else does.
    assert_eq!(selected, vec!["of", "the", "was"]);
}
