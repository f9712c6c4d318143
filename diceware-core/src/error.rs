// SPDX-License-Identifier: MIT
//
// Diceware: Word-List Passphrase Generator

//! Error types for word-list loading and passphrase generation
//!
//! Provides a unified error taxonomy using `thiserror` for ergonomic error handling.

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a word list is rejected while building a dictionary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No lines were supplied
    #[error("Word list was empty")]
    EmptyWordList,

    /// Line did not split into a key and a word
    #[error("Found an unrecognised line in the word list on line {line_number}: {raw_line}")]
    MalformedLine { line_number: usize, raw_line: String },

    /// Key shorter than the minimum sequence length
    #[error(
        "Sequence '{key}' on line {line_number} is shorter than necessary: found {length}, required {minimum}"
    )]
    SequenceTooShort {
        line_number: usize,
        key: String,
        length: usize,
        minimum: usize,
    },

    /// Key contains something other than ASCII digits
    #[error("Found a sequence that did not solely use digits on line {line_number}: {key}")]
    InvalidSequenceCharacters { line_number: usize, key: String },

    /// Key length differs from the first accepted key
    #[error(
        "Sequence '{key}' on line {line_number} has length {length}, expected {expected}"
    )]
    InconsistentSequenceLength {
        line_number: usize,
        key: String,
        length: usize,
        expected: usize,
    },

    /// Word has an embedded space
    #[error("Diceware word on line {line_number} contained a space: {word}")]
    WordContainsSpace { line_number: usize, word: String },

    /// Word shorter than the minimum word length
    #[error(
        "Diceware word '{word}' on line {line_number} is shorter than necessary: required {minimum}"
    )]
    WordTooShort {
        line_number: usize,
        word: String,
        minimum: usize,
    },

    /// Key already mapped to another word
    #[error(
        "Found duplicate diceware word for different sequences on line {line_number}: original={existing_word} duplicate={new_key}"
    )]
    DuplicateKey {
        line_number: usize,
        existing_word: String,
        new_key: String,
    },

    /// Word already mapped from another key
    #[error("Found duplicate diceware word on line {line_number}: duplicate={word}")]
    DuplicateWord { line_number: usize, word: String },
}

/// Core error type for passphrase operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Word list failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration validation failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Every attempt rolled a key with no word behind it
    #[error("No word found after {attempts} attempts (last key rolled: {last_key})")]
    NoSuchKey { attempts: u32, last_key: String },

    /// Passphrase would be too weak
    #[error("Cannot generate passphrases with {requested} words, at least {minimum} are required")]
    TooFewWords { requested: usize, minimum: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error was caused by a bad word list
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_conversion() {
        let err: Error = ValidationError::EmptyWordList.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Word list was empty");
    }

    #[test]
    fn test_messages_carry_context() {
        let err = ValidationError::DuplicateKey {
            line_number: 2,
            existing_word: "AAA".to_string(),
            new_key: "111".to_string(),
        };
        assert!(err.to_string().contains("original=AAA duplicate=111"));

        let err = ValidationError::MalformedLine {
            line_number: 1,
            raw_line: "111 ".to_string(),
        };
        assert!(err.to_string().contains("on line 1: 111 "));
    }

    #[test]
    fn test_non_validation_errors() {
        let err = Error::NoSuchKey {
            attempts: 3,
            last_key: "999".to_string(),
        };
        assert!(!err.is_validation());
        assert!(!Error::Config("bad".to_string()).is_validation());
    }
}
