use crate::constants::STOP_WORDS;
use std::collections::HashMap;
use std::str::SplitAsciiWhitespace;

/// Keeps only the ASCII alphanumeric characters of `word`, uppercased.
///
/// Punctuation is dropped rather than treated as a separator, so
/// `"don't"` becomes `"DONT"` and `"co-op"` becomes `"COOP"`. Non-ASCII
/// characters are dropped the same way.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Yields cleaned tokens from chunks delimited by ASCII whitespace, skipping chunks
/// that clean to nothing and stop words.
pub struct Lexer<'a> {
    chunks: SplitAsciiWhitespace<'a>,
}
impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chunks: input.split_ascii_whitespace(),
        }
    }

    fn next_token(&mut self) -> Option<String> {
        loop {
            let cleaned = clean_word(self.chunks.next()?);
            if !cleaned.is_empty() && !is_stop_word(&cleaned) {
                return Some(cleaned);
            }
        }
    }
}
impl<'a> Iterator for Lexer<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    Lexer::new(text).collect()
}

/// Occurrence count of every qualifying token in `text`.
pub fn count_tokens(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in Lexer::new(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
