// SPDX-License-Identifier: MIT
//
// Diceware: Word-List Passphrase Generator

//! Configuration management for passphrase generation

use crate::{Error, Result};
use serde::Deserialize;

/// Environment variable prefix, e.g. `DICEWARE_WORD_COUNT`
pub const ENV_PREFIX: &str = "DICEWARE_";

/// Passphrase generator configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of words per passphrase
    #[serde(default = "default_word_count")]
    pub word_count: usize,

    /// Separator placed between words
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Rolls allowed per word before giving up on a sparse list
    #[serde(default = "default_max_draw_attempts")]
    pub max_draw_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            separator: default_separator(),
            max_draw_attempts: default_max_draw_attempts(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of `(name, value)` pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| Error::Config(format!("Failed to parse environment variables: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.word_count < crate::MINIMUM_WORD_COUNT {
            return Err(Error::Config(format!(
                "word_count must be at least {}, got {}",
                crate::MINIMUM_WORD_COUNT,
                self.word_count
            )));
        }

        if self.separator.is_empty() {
            return Err(Error::Config("separator cannot be empty".to_string()));
        }

        if self.max_draw_attempts == 0 {
            return Err(Error::Config("max_draw_attempts must be > 0".to_string()));
        }

        Ok(())
    }
}

// Default value functions
fn default_word_count() -> usize {
    crate::DEFAULT_WORD_COUNT
}

fn default_separator() -> String {
    " ".to_string()
}

fn default_max_draw_attempts() -> u32 {
    crate::DEFAULT_MAX_DRAW_ATTEMPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.word_count, 6);
        assert_eq!(config.separator, " ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_prefixed_vars() {
        let config = GeneratorConfig::from_vars(vars(&[
            ("DICEWARE_WORD_COUNT", "8"),
            ("DICEWARE_SEPARATOR", "-"),
            ("DICEWARE_MAX_DRAW_ATTEMPTS", "50"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.word_count, 8);
        assert_eq!(config.separator, "-");
        assert_eq!(config.max_draw_attempts, 50);
    }

    #[test]
    fn test_rejects_short_passphrases() {
        let result = GeneratorConfig::from_vars(vars(&[("DICEWARE_WORD_COUNT", "3")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_unparseable_value() {
        let result = GeneratorConfig::from_vars(vars(&[("DICEWARE_WORD_COUNT", "many")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_validation() {
        let mut config = GeneratorConfig::default();
        config.separator.clear();
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            max_draw_attempts: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
