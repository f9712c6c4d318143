// SPDX-License-Identifier: MIT
//
// Diceware: Word-List Passphrase Generator

//! Random word selection from a built dictionary
//!
//! Each roll picks `sequence_length` characters independently and uniformly from
//! the dictionary alphabet, like throwing one die per position. The roll is uniform
//! over `alphabet^sequence_length`, not over the words: when the list is sparse a
//! roll may name a key that does not exist.
//!
//! Missing keys are handled by bounded retry. A miss re-rolls, up to
//! `max_attempts` rolls per word, and then fails with [`Error::NoSuchKey`]. An
//! absent word is never returned. Rejecting misses makes accepted words uniform
//! over the entries; the number of rolls per word is geometric with success
//! probability [`Dictionary::density`], and dense lists always hit first time.

use crate::dictionary::Dictionary;
use crate::metrics::DrawMetrics;
use crate::rng::SharedRng;
use crate::{Error, Result};
use tracing::{trace, warn};

/// Draws passphrase components from a borrowed dictionary
#[derive(Debug, Clone)]
pub struct Sampler<'a> {
    dictionary: &'a Dictionary,
    rng: SharedRng,
    max_attempts: u32,
    metrics: Option<DrawMetrics>,
}

impl<'a> Sampler<'a> {
    /// Sampler backed by the process-wide secure generator
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            rng: SharedRng::system(),
            max_attempts: crate::DEFAULT_MAX_DRAW_ATTEMPTS,
            metrics: None,
        }
    }

    pub fn with_rng(mut self, rng: SharedRng) -> Self {
        self.rng = rng;
        self
    }

    /// Limit rolls per word; values below one are raised to one
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_metrics(mut self, metrics: DrawMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Roll one candidate key
    pub fn roll(&self) -> String {
        let alphabet = self.dictionary.alphabet();
        (0..self.dictionary.sequence_length())
            .map(|_| alphabet[self.rng.index(alphabet.len())])
            .collect()
    }

    /// Draw the next passphrase component
    pub fn draw(&self) -> Result<&'a str> {
        let dictionary = self.dictionary;
        let mut last_key = String::new();

        for attempt in 1..=self.max_attempts {
            let key = self.roll();

            if let Some(word) = dictionary.get(&key) {
                if attempt > 1 {
                    trace!("Draw hit after {} attempts", attempt);
                }
                if let Some(metrics) = &self.metrics {
                    metrics.record_draw(attempt);
                }
                return Ok(word);
            }

            trace!(key = %key, attempt, "Rolled a key with no word");
            if let Some(metrics) = &self.metrics {
                metrics.record_miss();
            }
            last_key = key;
        }

        warn!(
            "No word found after {} attempts (dictionary density {:.6})",
            self.max_attempts,
            dictionary.density()
        );
        if let Some(metrics) = &self.metrics {
            metrics.record_failure(self.max_attempts);
        }

        Err(Error::NoSuchKey {
            attempts: self.max_attempts,
            last_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn dense_binary() -> Dictionary {
        Dictionary::build([
            "111 AAA", "112 AAB", "121 ABA", "122 ABB", "211 BAA", "212 BAB", "221 BBA", "222 BBB",
        ])
        .unwrap()
    }

    #[test]
    fn test_sampler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sampler<'static>>();
    }

    #[test]
    fn test_roll_uses_alphabet() {
        let dictionary = Dictionary::build(["135 one", "531 two"]).unwrap();
        let sampler = Sampler::new(&dictionary).with_rng(SharedRng::seeded(3));

        for _ in 0..1000 {
            let key = sampler.roll();
            assert_eq!(key.len(), 3);
            assert!(key.chars().all(|c| dictionary.alphabet().contains(&c)));
        }
    }

    #[test]
    fn test_dense_draws_never_miss() {
        let dictionary = dense_binary();
        let metrics = DrawMetrics::new();
        let sampler = Sampler::new(&dictionary)
            .with_rng(SharedRng::seeded(11))
            .with_max_attempts(1)
            .with_metrics(metrics.clone());

        for _ in 0..10_000 {
            let word = sampler.draw().unwrap();
            assert!(dictionary.contains_word(word));
        }

        assert_eq!(metrics.draws_total(), 10_000);
        assert_eq!(metrics.misses_total(), 0);
        assert_eq!(metrics.failures_total(), 0);
    }

    #[test]
    fn test_single_entry_dictionary() {
        let dictionary = Dictionary::build(["111 AAA"]).unwrap();
        let sampler = Sampler::new(&dictionary);
        assert_eq!(sampler.draw().unwrap(), "AAA");
    }

    #[test]
    fn test_sparse_retry_is_uniform_over_entries() {
        // Alphabet {1, 2}, 2 of 8 keys present
        let dictionary = Dictionary::build(["111 AAA", "222 BBB"]).unwrap();
        let metrics = DrawMetrics::new();
        let sampler = Sampler::new(&dictionary)
            .with_rng(SharedRng::seeded(5))
            .with_metrics(metrics.clone());

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..10_000 {
            *counts.entry(sampler.draw().unwrap()).or_default() += 1;
        }

        assert_eq!(counts.len(), 2);
        for count in counts.values() {
            assert!((4_000..=6_000).contains(count), "skewed count {}", count);
        }
        assert!(metrics.misses_total() > 0);
        assert!(metrics.mean_attempts_per_draw() > 2.0);
    }

    #[test]
    fn test_exhausted_attempts_report_no_such_key() {
        let dictionary = Dictionary::build(["111 AAA", "999 ZZZ"]).unwrap();
        let metrics = DrawMetrics::new();
        let sampler = Sampler::new(&dictionary)
            .with_rng(SharedRng::seeded(9))
            .with_max_attempts(1)
            .with_metrics(metrics.clone());

        let mut hits = 0;
        let mut failures = 0;
        for _ in 0..200 {
            match sampler.draw() {
                Ok(word) => {
                    assert!(dictionary.contains_word(word));
                    hits += 1;
                }
                Err(Error::NoSuchKey { attempts, last_key }) => {
                    assert_eq!(attempts, 1);
                    assert_eq!(last_key.len(), 3);
                    assert!(dictionary.get(&last_key).is_none());
                    failures += 1;
                }
                Err(other) => panic!("unexpected error: {}", other),
            }
        }

        assert!(hits > 0);
        assert!(failures > 0);
        assert_eq!(metrics.failures_total(), failures);
    }

    #[test]
    fn test_max_attempts_floor() {
        let dictionary = dense_binary();
        let sampler = Sampler::new(&dictionary).with_max_attempts(0);
        assert_eq!(sampler.max_attempts(), 1);
        assert!(sampler.draw().is_ok());
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let dictionary = dense_binary();
        let a = Sampler::new(&dictionary).with_rng(SharedRng::seeded(21));
        let b = Sampler::new(&dictionary).with_rng(SharedRng::seeded(21));

        let xs: Vec<&str> = (0..32).map(|_| a.draw().unwrap()).collect();
        let ys: Vec<&str> = (0..32).map(|_| b.draw().unwrap()).collect();
        assert_eq!(xs, ys);
    }
}
