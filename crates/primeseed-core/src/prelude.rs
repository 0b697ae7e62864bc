//! Primeseed Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use primeseed_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{Decomposition, SEED_PRIMES};

// Re-export the algorithms
pub use crate::analysis::{generation_depths, hub_primes, parent_pair_counts, unique_primes};
pub use crate::classify::{decompositions, is_seed_prime, seed_primes_below};
pub use crate::closure::{generate, Closure, GenerationEntry};
pub use crate::coverage::{verify, CoverageReport};
pub use crate::gaps::{gap_ratios, gap_sequence, termination_check, Termination};
pub use crate::primality::{is_prime, primes_below, smallest_factor_pair};

// Re-export error types
pub use crate::error::{CheckpointError, PrimeseedError, Result};
