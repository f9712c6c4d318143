// SPDX-License-Identifier: MIT
//
// Diceware: Word-List Passphrase Generator

//! Passphrase assembly
//!
//! A passphrase is a run of independent draws from one [`Sampler`]. Fewer than
//! [`MINIMUM_WORD_COUNT`](crate::MINIMUM_WORD_COUNT) words is refused outright.

use crate::dictionary::Dictionary;
use crate::sampler::Sampler;
use crate::{Error, Result};
use std::fmt;

/// Words drawn for one passphrase, in draw order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passphrase<'a> {
    words: Vec<&'a str>,
}

impl<'a> Passphrase<'a> {
    /// Draw `word_count` words, failing on the first unsuccessful draw
    pub fn generate(sampler: &Sampler<'a>, word_count: usize) -> Result<Self> {
        if word_count < crate::MINIMUM_WORD_COUNT {
            return Err(Error::TooFewWords {
                requested: word_count,
                minimum: crate::MINIMUM_WORD_COUNT,
            });
        }

        let words = (0..word_count)
            .map(|_| sampler.draw())
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { words })
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.words.join(separator)
    }
}

impl fmt::Display for Passphrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(" "))
    }
}

/// Entropy of a `word_count`-word passphrase, assuming each word is uniform over the entries
pub fn estimated_entropy_bits(dictionary: &Dictionary, word_count: usize) -> f64 {
    dictionary.entropy_bits_per_word() * word_count as f64
}
