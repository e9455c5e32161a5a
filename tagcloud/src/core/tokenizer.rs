// src/core/tokenizer.rs
use crate::core::separators::SeparatorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal run of characters that are either all separators or all not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Returns the longest prefix of `text[position..]` whose characters agree on
/// separator membership with the character at `position`.
///
/// `position` is a byte offset. At the end of the text, or when `position` is
/// out of bounds or not on a character boundary, the result is empty.
///
/// # Examples
///
/// ```
/// use tagcloud::core::separators::SeparatorSet;
/// use tagcloud::core::tokenizer::next_word_or_separator;
///
/// let separators = SeparatorSet::default();
/// assert_eq!(next_word_or_separator("hello, world", 0, &separators), "hello");
/// assert_eq!(next_word_or_separator("hello, world", 5, &separators), ", ");
/// ```
#[inline]
#[must_use]
pub fn next_word_or_separator<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> &'a str {
    let Some(rest) = text.get(position..) else {
        return "";
    };
    let Some(first) = rest.chars().next() else {
        return rest;
    };

    let is_separator = separators.contains(first);
    let end = rest
        .char_indices()
        .find(|&(_, c)| separators.contains(c) != is_separator)
        .map_or(rest.len(), |(index, _)| index);

    &rest[..end]
}

/// Iterator over the tokens of a text, in order, with no gaps.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> Tokens<'a, 's> {
    #[inline]
    #[must_use]
    pub const fn new(text: &'a str, separators: &'s SeparatorSet) -> Self {
        Self {
            text,
            position: 0,
            separators,
        }
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = next_word_or_separator(self.text, self.position, self.separators);
        let first = token.chars().next()?;
        self.position = self.position.saturating_add(token.len());

        let kind = if self.separators.contains(first) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        };
        Some(Token { text: token, kind })
    }
}

#[inline]
pub fn tokenize<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens::new(text, separators)
}

/// Word tokens only; separator runs are dropped.
#[inline]
pub fn words<'a>(text: &'a str, separators: &SeparatorSet) -> impl Iterator<Item = &'a str> {
    Tokens::new(text, separators)
        .filter(|token| token.kind == TokenKind::Word)
        .map(|token| token.text)
}
