//! Pattern analysis over decompositions and closure records.
//!
//! Answers two descriptive questions about a verified range: which primes
//! have only a single way to be reached (unique), which are reachable many
//! ways (hubs), and how deep the generation chain runs.

use crate::classify::decompositions;
use crate::closure::GenerationEntry;
use crate::primality::is_prime;
use std::collections::{BTreeMap, HashMap};

/// Number of decomposition pairs for every prime in `(floor, limit]`.
///
/// `floor` is typically the largest seed, so only derived primes are counted.
pub fn parent_pair_counts(limit: u64, floor: u64) -> BTreeMap<u64, usize> {
    (floor + 1..=limit)
        .filter(|&n| is_prime(n))
        .map(|n| (n, decompositions(n).len()))
        .collect()
}

/// Primes with exactly one parent pair, ascending.
pub fn unique_primes(counts: &BTreeMap<u64, usize>) -> Vec<u64> {
    counts
        .iter()
        .filter(|(_, &c)| c == 1)
        .map(|(&p, _)| p)
        .collect()
}

/// Primes with more than `min_pairs` parent pairs, most-connected first.
pub fn hub_primes(counts: &BTreeMap<u64, usize>, min_pairs: usize) -> Vec<(u64, usize)> {
    let mut hubs: Vec<(u64, usize)> = counts
        .iter()
        .filter(|(_, &c)| c > min_pairs)
        .map(|(&p, &c)| (p, c))
        .collect();
    hubs.sort_by(|a, b| b.1.cmp(&a.1));
    hubs
}

/// Primes per generation index, derived from a closure record.
pub fn generation_depths(record: &HashMap<u64, GenerationEntry>) -> Vec<usize> {
    let max = record.values().map(|e| e.generation).max().unwrap_or(0);
    let mut depths = vec![0usize; max as usize + 1];
    for entry in record.values() {
        depths[entry.generation as usize] += 1;
    }
    depths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::generate;
    use crate::types::SEED_PRIMES;

    #[test]
    fn counts_match_decompositions() {
        let counts = parent_pair_counts(50, 0);
        for (&p, &c) in &counts {
            assert_eq!(c, decompositions(p).len());
        }
        // Seeds decompose zero ways; 13 only as 3 + 2×5; 41 as 3 + 2×19
        // and 7 + 2×17.
        assert_eq!(counts[&23], 0);
        assert_eq!(counts[&13], 1);
        assert_eq!(counts[&41], 2);
    }

    #[test]
    fn floor_excludes_low_primes() {
        let counts = parent_pair_counts(300, 167);
        assert!(counts.keys().all(|&p| p > 167));
        assert!(counts.contains_key(&173));
    }

    #[test]
    fn unique_and_hub_classification() {
        let mut counts = BTreeMap::new();
        counts.insert(13u64, 1usize);
        counts.insert(41, 2);
        counts.insert(97, 7);
        counts.insert(89, 9);

        assert_eq!(unique_primes(&counts), vec![13]);
        assert_eq!(hub_primes(&counts, 5), vec![(89, 9), (97, 7)]);
    }

    #[test]
    fn depths_match_generation_sizes() {
        let closure = generate(&SEED_PRIMES, 1000);
        assert_eq!(generation_depths(&closure.record), closure.generation_sizes);
    }

    #[test]
    fn empty_record() {
        assert_eq!(generation_depths(&HashMap::new()), vec![0]);
    }
}
