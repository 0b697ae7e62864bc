//! # Primeseed
//!
//! Search, verification, and analysis of seed primes.
//!
//! A *seed prime* is a prime `n` with no decomposition `n = a + 2b` where
//! `a < b` are both prime. Exactly eight are known — 2, 3, 5, 7, 11, 23,
//! 83, 167 — and applying the transform `r = p + 2q` (`p < q`) to that set
//! over and over regrows every other prime. This workspace searches ranges
//! for further seeds (with crash-safe checkpointing), runs the closure
//! generation, and verifies coverage against the true prime set.
//!
//! ## Quick Start
//!
//! ```rust
//! use primeseed::prelude::*;
//!
//! // Classify a candidate
//! assert!(!is_seed_prime(13)); // 13 = 3 + 2×5
//! assert!(is_seed_prime(23));
//!
//! // Regenerate the primes below 1000 from the canonical seeds
//! let closure = generate(&SEED_PRIMES, 1000);
//! let report = verify(&closure.generated, 1000, 10);
//! assert!(report.is_complete());
//! ```
//!
//! ## Checkpointed scanning
//!
//! ```rust,no_run
//! use primeseed::prelude::*;
//!
//! let scanner = Scanner::new(10_000_000, 1_000_000);
//! match scanner.run(|p| println!("{:.1}% ({} seeds)", p.percent, p.seeds_found))? {
//!     ScanOutcome::Complete { seeds } => println!("seeds: {:?}", seeds),
//!     ScanOutcome::Suspended { last_checked, .. } => {
//!         println!("suspended at {}, checkpoint retained", last_checked)
//!     }
//! }
//! # Ok::<(), primeseed::core::error::PrimeseedError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`primeseed_core`] - Primality oracle, seed classifier, closure
//!   generator, coverage verifier, gap/pattern analysis
//! - [`primeseed_search`] - Checkpointed scanner and checkpoint persistence

// Re-export all subcrates
pub use primeseed_core as core;
pub use primeseed_search as search;

/// Prelude module for convenient imports.
///
/// ```rust
/// use primeseed::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use primeseed_core::types::{Decomposition, SEED_PRIMES};

    // Core algorithms
    pub use primeseed_core::analysis::{
        generation_depths, hub_primes, parent_pair_counts, unique_primes,
    };
    pub use primeseed_core::classify::{decompositions, is_seed_prime, seed_primes_below};
    pub use primeseed_core::closure::{generate, Closure, GenerationEntry};
    pub use primeseed_core::coverage::{verify, CoverageReport};
    pub use primeseed_core::gaps::{gap_ratios, gap_sequence, termination_check, Termination};
    pub use primeseed_core::primality::{is_prime, primes_below, smallest_factor_pair};

    // Error types
    pub use primeseed_core::error::{CheckpointError, PrimeseedError, Result};

    // Search
    pub use primeseed_search::checkpoint::{
        checkpoint_path, delete_checkpoint, load_checkpoint, save_checkpoint, CheckpointState,
    };
    pub use primeseed_search::scanner::{ScanOutcome, ScanProgress, Scanner};
}
