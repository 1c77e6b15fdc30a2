use std::collections::{BTreeSet, HashMap};
use std::io::BufRead;

use regex::Regex;
use serde::Serialize;

use crate::Result;

/// Punctuation stripped from book text before splitting into words.
pub const DEFAULT_STRIP: &[char] = &[
    ',', ';', '&', ':', '!', '?', '*', '\'', '„', '“', '”', '_', '«', '»', '(', ')', '.', '"', '-',
];

/// Splits free text into words.
///
/// Every character in the strip set is replaced by a space, the result is
/// split on whitespace and each piece is optionally lowercased. Tokens made
/// only of digits are dropped when `skip_numeric` is set.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    strip: Option<Regex>,
    lowercase: bool,
    skip_numeric: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub tokens: usize,
    pub unique: usize,
}

impl Tokenizer {
    pub fn new(strip: &[char], lowercase: bool, skip_numeric: bool) -> Result<Self> {
        let strip = if strip.is_empty() {
            None
        } else {
            let class: String = strip
                .iter()
                .map(|c| regex::escape(&c.to_string()))
                .collect();
            Some(Regex::new(&format!("[{class}]"))?)
        };

        Ok(Self {
            strip,
            lowercase,
            skip_numeric,
        })
    }

    pub fn tokens(&self, text: &str) -> Vec<String> {
        let cleaned = match &self.strip {
            Some(strip) => strip.replace_all(text, " "),
            None => text.into(),
        };

        cleaned
            .split_whitespace()
            .filter(|token| !(self.skip_numeric && token.chars().all(|c| c.is_ascii_digit())))
            .map(|token| {
                if self.lowercase {
                    token.to_lowercase()
                } else {
                    token.to_owned()
                }
            })
            .collect()
    }

    /// Sorted set of distinct words, read one line at a time.
    pub fn vocabulary<R: BufRead>(&self, reader: R) -> Result<BTreeSet<String>> {
        let mut words = BTreeSet::new();

        for line in reader.lines() {
            words.extend(self.tokens(&line?));
        }

        Ok(words)
    }

    pub fn frequencies(&self, text: &str) -> HashMap<String, usize> {
        let mut hash_map = HashMap::new();
        for token in self.tokens(text) {
            *hash_map.entry(token).or_insert(0) += 1;
        }

        hash_map
    }

    pub fn stats(&self, text: &str) -> TextStats {
        let frequencies = self.frequencies(text);

        TextStats {
            characters: text.chars().count(),
            tokens: frequencies.values().sum(),
            unique: frequencies.len(),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_STRIP, true, true).expect("default strip set is a valid pattern")
    }
}
