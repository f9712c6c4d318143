// SPDX-License-Identifier: MIT
//
// Diceware: Word-List Passphrase Generator

//! Diceware Core Library
//!
//! This crate turns a diceware word list (numeric sequence → word lines) into a
//! validated, immutable dictionary and draws passphrase words from it with a
//! cryptographically secure random source.
//!
//! # Architecture
//!
//! The library is organized into modules representing core concerns:
//! - `dictionary`: Word-list parsing and validation
//! - `rng`: Process-wide secure generator handle
//! - `sampler`: Random sequence rolling and word lookup
//! - `passphrase`: Multi-word assembly and entropy estimate
//! - `config`: Configuration management with validation
//! - `metrics`: Draw statistics
//! - `error`: Unified error types
//!
//! # Example
//!
//! ```
//! use diceware_core::{Dictionary, Passphrase, Sampler};
//!
//! let dictionary = Dictionary::build([
//!     "111 alpha", "112 bravo", "121 charlie", "122 delta",
//!     "211 echo", "212 foxtrot", "221 golf", "222 hotel",
//! ])?;
//! let sampler = Sampler::new(&dictionary);
//! let passphrase = Passphrase::generate(&sampler, 6)?;
//! assert_eq!(passphrase.len(), 6);
//! # Ok::<(), diceware_core::Error>(())
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod metrics;
pub mod passphrase;
pub mod rng;
pub mod sampler;

pub use dictionary::Dictionary;
pub use error::{Error, Result, ValidationError};
pub use passphrase::Passphrase;
pub use rng::SharedRng;
pub use sampler::Sampler;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shortest accepted digit sequence
pub const MINIMUM_SEQUENCE_LENGTH: usize = 3;

/// Shortest accepted word
pub const MINIMUM_WORD_LENGTH: usize = 3;

/// Fewest words allowed in a passphrase
pub const MINIMUM_WORD_COUNT: usize = 4;

/// Words per passphrase unless configured otherwise
pub const DEFAULT_WORD_COUNT: usize = 6;

/// Rolls per word before a sparse list gives up
pub const DEFAULT_MAX_DRAW_ATTEMPTS: u32 = 1000;
