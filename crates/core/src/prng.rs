//! Deterministic PRNG based on the SplitMix64 algorithm.
//!
//! Provides a fast, seedable pseudo-random number generator for
//! reproducible noise. Same seed always produces the same sequence of
//! values across all platforms (pure integer arithmetic, no floating
//! point in the core algorithm). Unlike xorshift-family generators,
//! SplitMix64 has no all-zeros fixed point, so every seed — including
//! 0 — is usable as-is.

use serde::{Deserialize, Serialize};

/// SplitMix64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard Weyl increment `0x9E3779B97F4A7C15` with the
/// murmur-style finalizer constants. The state walks a single cycle of
/// the full 64-bit space, so streams from nearby seeds do not overlap
/// for any realistic draw count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates a new PRNG with a system-sourced seed.
    ///
    /// Use [`SplitMix64::new`] when the sequence must be reproducible.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` divided by 2^53 for
    /// full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}
