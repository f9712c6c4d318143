// SPDX-License-Identifier: MIT
//
// Diceware: Word-List Passphrase Generator

//! Draw statistics for the passphrase sampler

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters shared by every sampler the handle is attached to
#[derive(Clone, Default)]
pub struct DrawMetrics {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    // Completed draws
    draws_total: AtomicU64,
    // Individual key rolls, hits and misses alike
    attempts_total: AtomicU64,
    misses_total: AtomicU64,
    // Draws that ran out of attempts
    failures_total: AtomicU64,
}

impl DrawMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_draw(&self, attempts: u32) {
        self.inner.draws_total.fetch_add(1, Ordering::Relaxed);
        self.record_attempts(attempts);
    }

    pub fn record_failure(&self, attempts: u32) {
        self.inner.failures_total.fetch_add(1, Ordering::Relaxed);
        self.record_attempts(attempts);
    }

    fn record_attempts(&self, attempts: u32) {
        self.inner.attempts_total.fetch_add(attempts as u64, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.inner.misses_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn draws_total(&self) -> u64 {
        self.inner.draws_total.load(Ordering::Relaxed)
    }

    pub fn attempts_total(&self) -> u64 {
        self.inner.attempts_total.load(Ordering::Relaxed)
    }

    pub fn misses_total(&self) -> u64 {
        self.inner.misses_total.load(Ordering::Relaxed)
    }

    pub fn failures_total(&self) -> u64 {
        self.inner.failures_total.load(Ordering::Relaxed)
    }

    // Derived metrics
    pub fn hit_rate(&self) -> f64 {
        let attempts = self.attempts_total() as f64;
        if attempts > 0.0 {
            (attempts - self.misses_total() as f64) / attempts
        } else {
            0.0
        }
    }

    pub fn mean_attempts_per_draw(&self) -> f64 {
        let draws = self.draws_total() as f64;
        if draws > 0.0 {
            self.attempts_total() as f64 / draws
        } else {
            0.0
        }
    }
}

impl std::fmt::Debug for DrawMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawMetrics")
            .field("draws_total", &self.draws_total())
            .field("attempts_total", &self.attempts_total())
            .field("misses_total", &self.misses_total())
            .field("failures_total", &self.failures_total())
            .finish()
    }
}
