//! Closure generation: regrow the primes from a seed set.
//!
//! Starting from generation 0 (the seeds), repeatedly applies the transform
//! `r = p + 2q` over all pairs `p < q` of already-generated primes, keeping
//! any prime result up to the limit. A pass that adds nothing ends the run;
//! termination is guaranteed because the generated set is bounded by the
//! primes below the limit and strictly grows until then.

use crate::primality::is_prime;
use std::collections::{BTreeSet, HashMap};

/// How a prime entered the generated set.
///
/// Generation 0 entries are seeds and have no parents. Every other entry
/// records the first pair `(p, q)` that produced it in scan order; entries
/// are append-only and never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationEntry {
    pub generation: u32,
    pub parents: Option<(u64, u64)>,
}

/// Result of a closure run.
#[derive(Debug, Clone)]
pub struct Closure {
    /// Every prime reached, including seeds above the limit.
    pub generated: BTreeSet<u64>,
    /// Per-prime generation index and parent pair.
    pub record: HashMap<u64, GenerationEntry>,
    /// Primes added per generation; index 0 is the seed count.
    pub generation_sizes: Vec<usize>,
}

impl Closure {
    /// Highest generation index that added primes.
    pub fn max_generation(&self) -> u32 {
        self.generation_sizes.len().saturating_sub(1) as u32
    }
}

/// Generate the closure of `seeds` under `r = p + 2q` (`p < q`), up to `limit`.
pub fn generate(seeds: &[u64], limit: u64) -> Closure {
    let mut generated: BTreeSet<u64> = seeds.iter().copied().collect();
    let mut record: HashMap<u64, GenerationEntry> = generated
        .iter()
        .map(|&s| {
            (
                s,
                GenerationEntry {
                    generation: 0,
                    parents: None,
                },
            )
        })
        .collect();
    let mut generation_sizes = vec![generated.len()];

    let mut generation = 0u32;
    loop {
        generation += 1;
        // Ascending snapshot: the inner break below relies on q only growing.
        let current: Vec<u64> = generated.iter().copied().collect();
        let mut new_in_generation = 0usize;

        for (i, &p) in current.iter().enumerate() {
            for &q in &current[i + 1..] {
                let r = p + 2 * q;
                if r > limit {
                    break;
                }
                if is_prime(r) && !generated.contains(&r) {
                    generated.insert(r);
                    record.insert(
                        r,
                        GenerationEntry {
                            generation,
                            parents: Some((p, q)),
                        },
                    );
                    new_in_generation += 1;
                }
            }
        }

        if new_in_generation == 0 {
            break;
        }
        generation_sizes.push(new_in_generation);
    }

    Closure {
        generated,
        record,
        generation_sizes,
    }
}
