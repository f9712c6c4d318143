// SPDX-License-Identifier: MIT
//
// Diceware: Word-List Passphrase Generator

//! Shared cryptographically secure random source
//!
//! One OS-seeded generator serves the whole process. Handles are cheap clones of
//! an `Arc`, and each index draw takes the lock once, so samplers on different
//! threads can share the generator safely. Tests swap in a seeded generator.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use std::sync::{Arc, OnceLock};

/// A generator suitable for secrets that can move between threads
pub trait SecureRng: RngCore + CryptoRng + Send {}

impl<T: RngCore + CryptoRng + Send> SecureRng for T {}

static SYSTEM_RNG: OnceLock<SharedRng> = OnceLock::new();

/// Cloneable, thread-safe handle to a secure generator
#[derive(Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<Box<dyn SecureRng>>>,
}

impl SharedRng {
    /// Wrap a specific generator
    pub fn new<R: SecureRng + 'static>(rng: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(rng))),
        }
    }

    /// Process-wide generator seeded from the operating system on first use
    pub fn system() -> Self {
        SYSTEM_RNG
            .get_or_init(|| Self::new(StdRng::from_entropy()))
            .clone()
    }

    /// Deterministic generator for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Uniform index in `0..upper`.
    ///
    /// `upper` must be non-zero.
    pub fn index(&self, upper: usize) -> usize {
        self.inner.lock().gen_range(0..upper)
    }
}

impl std::fmt::Debug for SharedRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRng").finish_non_exhaustive()
    }
}
