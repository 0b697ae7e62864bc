//! Shared types used across the primeseed crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical seed set: every prime in `[2, 167]` with no decomposition,
/// and (conjecturally) the complete list of seed primes.
pub const SEED_PRIMES: [u64; 8] = [2, 3, 5, 7, 11, 23, 83, 167];

/// A decomposition witness `n = a + 2b` with `a < b`, both prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub a: u64,
    pub b: u64,
}

impl Decomposition {
    pub fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }

    /// The number this pair decomposes, `a + 2b`.
    pub fn value(&self) -> u64 {
        self.a + 2 * self.b
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + 2×{}", self.a, self.b)
    }
}
