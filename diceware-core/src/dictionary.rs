// SPDX-License-Identifier: MIT
//
// Diceware: Word-List Passphrase Generator

//! Validated diceware dictionary
//!
//! A word list is a sequence of `<digits><separator><word>` lines. The separator is
//! the first space of the trimmed line, or the first tab when the line has no
//! space. Every line is validated in one pass and the first problem aborts the
//! build; a [`Dictionary`] only exists if the whole list was accepted.
//!
//! Keys are checked character by character: they must be ASCII digits, and
//! leading zeros are significant (`007` is its own key). All keys share the
//! length of the first accepted key.

use crate::error::{Result, ValidationError};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::BufRead;
use tracing::debug;

/// Immutable mapping from fixed-length digit sequences to words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    sequence_length: usize,
    entries: BTreeMap<String, String>,
    alphabet: Vec<char>,
}

impl Dictionary {
    /// Build a dictionary from raw word-list lines
    pub fn build<I, S>(lines: I) -> std::result::Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = DictionaryBuilder::default();
        for (index, line) in lines.into_iter().enumerate() {
            builder.push_line(index + 1, line.as_ref())?;
        }
        builder.finish()
    }

    /// Read every line from `reader` and build a dictionary from them
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(Self::build(lines)?)
    }

    /// Number of digits in every key
    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Distinct key characters, sorted
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built dictionary
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the word for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.values().any(|w| w == word)
    }

    /// Words in key order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// `(key, word)` pairs in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, w)| (k.as_str(), w.as_str()))
    }

    /// Number of distinct keys that can be rolled from the alphabet.
    ///
    /// Returns `None` when the count does not fit in a `u64`.
    pub fn key_space(&self) -> Option<u64> {
        let exponent = u32::try_from(self.sequence_length).ok()?;
        (self.alphabet.len() as u64).checked_pow(exponent)
    }

    /// True when every rollable key maps to a word, so no roll can miss
    pub fn is_dense(&self) -> bool {
        self.key_space() == Some(self.len() as u64)
    }

    /// Fraction of rollable keys that map to a word (1.0 for dense lists)
    pub fn density(&self) -> f64 {
        let key_space = (self.alphabet.len() as f64).powf(self.sequence_length as f64);
        self.len() as f64 / key_space
    }

    /// Entropy contributed by one uniformly chosen word, in bits
    pub fn entropy_bits_per_word(&self) -> f64 {
        (self.len() as f64).log2()
    }
}

/// Accumulates validated lines; never hands out a partial dictionary
#[derive(Default)]
struct DictionaryBuilder {
    sequence_length: Option<usize>,
    entries: BTreeMap<String, String>,
    words: HashSet<String>,
}

impl DictionaryBuilder {
    fn push_line(&mut self, line_number: usize, raw_line: &str) -> std::result::Result<(), ValidationError> {
        let (key, word) = split_line(raw_line).ok_or_else(|| ValidationError::MalformedLine {
            line_number,
            raw_line: raw_line.to_string(),
        })?;

        let length = key.chars().count();
        if length < crate::MINIMUM_SEQUENCE_LENGTH {
            return Err(ValidationError::SequenceTooShort {
                line_number,
                key: key.to_string(),
                length,
                minimum: crate::MINIMUM_SEQUENCE_LENGTH,
            });
        }

        if !key.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidSequenceCharacters {
                line_number,
                key: key.to_string(),
            });
        }

        let expected = *self.sequence_length.get_or_insert(length);
        if length != expected {
            return Err(ValidationError::InconsistentSequenceLength {
                line_number,
                key: key.to_string(),
                length,
                expected,
            });
        }

        if word.contains(' ') {
            return Err(ValidationError::WordContainsSpace {
                line_number,
                word: word.to_string(),
            });
        }

        if word.chars().count() < crate::MINIMUM_WORD_LENGTH {
            return Err(ValidationError::WordTooShort {
                line_number,
                word: word.to_string(),
                minimum: crate::MINIMUM_WORD_LENGTH,
            });
        }

        if let Some(existing) = self.entries.get(key) {
            return Err(ValidationError::DuplicateKey {
                line_number,
                existing_word: existing.clone(),
                new_key: key.to_string(),
            });
        }

        if !self.words.insert(word.to_string()) {
            return Err(ValidationError::DuplicateWord {
                line_number,
                word: word.to_string(),
            });
        }

        self.entries.insert(key.to_string(), word.to_string());
        Ok(())
    }

    fn finish(self) -> std::result::Result<Dictionary, ValidationError> {
        let sequence_length = self.sequence_length.ok_or(ValidationError::EmptyWordList)?;

        let alphabet: BTreeSet<char> = self.entries.keys().flat_map(|k| k.chars()).collect();
        let alphabet: Vec<char> = alphabet.into_iter().collect();
        let symbols: String = alphabet.iter().collect();

        debug!(
            entries = self.entries.len(),
            sequence_length,
            alphabet = %symbols,
            "Built diceware dictionary"
        );

        Ok(Dictionary {
            sequence_length,
            entries: self.entries,
            alphabet,
        })
    }
}

/// Split a line into trimmed `(key, word)`, on the first space or else the first tab
fn split_line(raw_line: &str) -> Option<(&str, &str)> {
    let line = trim_control(raw_line);
    let (key, word) = split_pair(line, ' ').or_else(|| split_pair(line, '\t'))?;
    Some((trim_control(key), trim_control(word)))
}

/// Strip space and ASCII control characters only; other Unicode whitespace is content
fn trim_control(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

fn split_pair(line: &str, separator: char) -> Option<(&str, &str)> {
    line.split_once(separator)
        .filter(|(key, word)| !key.is_empty() && !word.is_empty())
}
