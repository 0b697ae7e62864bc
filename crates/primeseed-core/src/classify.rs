//! Seed prime classification.
//!
//! A prime `n` is a seed prime when it has no decomposition `n = a + 2b`
//! with `a < b`, both prime. The candidate range for `a` stops at `n / 3`:
//! `b > a` and `a + 2b = n` force `a < n/3`, so nothing beyond that bound
//! can witness a decomposition. The bound uses integer division and must
//! stay exact; rounding it would misclassify near-boundary values.

use crate::primality::is_prime;
use crate::types::Decomposition;

/// Check whether `n` is a seed prime.
///
/// Returns false for non-primes. Short-circuits on the first witness found.
pub fn is_seed_prime(n: u64) -> bool {
    if !is_prime(n) {
        return false;
    }
    for a in 2..=n / 3 {
        if is_prime(a) {
            let remainder = n - a;
            if remainder % 2 == 0 {
                let b = remainder / 2;
                if b > a && is_prime(b) {
                    return false;
                }
            }
        }
    }
    true
}

/// Every decomposition witness of `n`, in ascending-`a` order.
///
/// Empty for seed primes and for non-primes. Diagnostic only: classification
/// needs existence, not the witnesses themselves.
pub fn decompositions(n: u64) -> Vec<Decomposition> {
    let mut found = Vec::new();
    if !is_prime(n) {
        return found;
    }
    for a in 2..=n / 3 {
        if is_prime(a) {
            let remainder = n - a;
            if remainder % 2 == 0 {
                let b = remainder / 2;
                if b > a && is_prime(b) {
                    found.push(Decomposition::new(a, b));
                }
            }
        }
    }
    found
}

/// All seed primes in `[2, limit]`, ascending.
///
/// One-shot search with no persistence; for long ranges use the
/// checkpointed scanner instead.
pub fn seed_primes_below(limit: u64) -> Vec<u64> {
    (2..=limit).filter(|&n| is_seed_prime(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SEED_PRIMES;

    #[test]
    fn non_primes_are_never_seeds() {
        for n in [0u64, 1, 4, 6, 9, 15, 100, 299] {
            assert!(!is_seed_prime(n), "{} is not prime", n);
        }
    }

    #[test]
    fn thirteen_decomposes() {
        // 13 = 3 + 2×5
        assert!(!is_seed_prime(13));
        let witnesses = decompositions(13);
        assert_eq!(witnesses, vec![Decomposition::new(3, 5)]);
    }

    #[test]
    fn known_non_seeds_have_witnesses() {
        for p in [13u64, 17, 19, 29, 37, 41, 43, 47] {
            let witnesses = decompositions(p);
            assert!(!witnesses.is_empty(), "{} should decompose", p);
            for w in &witnesses {
                assert_eq!(w.value(), p);
                assert!(w.a < w.b);
            }
        }
    }

    #[test]
    fn seeds_have_no_witnesses() {
        for p in SEED_PRIMES {
            assert!(is_seed_prime(p), "{} should be a seed prime", p);
            assert!(decompositions(p).is_empty());
        }
    }

    #[test]
    fn scan_to_200_matches_canonical() {
        assert_eq!(seed_primes_below(200), SEED_PRIMES.to_vec());
    }

    #[test]
    fn scan_to_1000_matches_canonical() {
        assert_eq!(seed_primes_below(1000), SEED_PRIMES.to_vec());
    }

    #[test]
    fn trivial_limits() {
        assert!(seed_primes_below(0).is_empty());
        assert!(seed_primes_below(1).is_empty());
        assert_eq!(seed_primes_below(2), vec![2]);
    }
}
