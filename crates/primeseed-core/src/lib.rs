//! # Primeseed Core
//!
//! Core algorithms and shared types for seed prime search.
//!
//! A *seed prime* is a prime that cannot be written as `a + 2b` with
//! `a < b` both prime. This crate holds the pure, stateless pieces of the
//! toolkit:
//!
//! - **Primality oracle** — deterministic trial division
//! - **Seed classifier** — decomposition search with the exact `a ≤ n/3` bound
//! - **Closure generator** — regrow the primes from a seed set via `r = p + 2q`
//! - **Coverage verifier** — compare a generated set against the true primes
//! - **Gap & pattern analysis** — gap cascade and parent-pair structure
//!
//! The checkpointed range scanner lives in `primeseed-search`; this crate has
//! no I/O and no mutable state beyond the values it returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use primeseed_core::prelude::*;
//!
//! // 13 = 3 + 2×5, so it is not a seed prime
//! assert!(!is_seed_prime(13));
//!
//! // The canonical eight regenerate every prime up to 1000
//! let closure = generate(&SEED_PRIMES, 1000);
//! let report = verify(&closure.generated, 1000, 10);
//! assert!(report.is_complete());
//! ```

pub mod analysis;
pub mod classify;
pub mod closure;
pub mod coverage;
pub mod error;
pub mod gaps;
pub mod primality;
pub mod prelude;
pub mod types;
