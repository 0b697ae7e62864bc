//! Gap analysis over a seed list.
//!
//! The canonical eight seeds end with the gap cascade 12, 60, 84
//! (4×3, 4×3×5, 4×3×7). Extending the cascade one step lands on a
//! composite, which is what stops the sequence; `termination_check`
//! reproduces that extrapolation.

use crate::primality::{is_prime, smallest_factor_pair};

/// One extrapolated step of the `4×3×p` gap cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Termination {
    /// Predicted next gap, `12 ×` the next prime multiplier.
    pub next_gap: u64,
    /// Last seed plus the predicted gap.
    pub candidate: u64,
    /// Whether the candidate is prime (it is not, for the canonical seeds).
    pub candidate_is_prime: bool,
    /// Smallest factor pair when the candidate is composite.
    pub factor_pair: Option<(u64, u64)>,
}

/// Differences between consecutive seeds.
pub fn gap_sequence(seeds: &[u64]) -> Vec<u64> {
    seeds.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Growth ratio of each gap over its predecessor.
pub fn gap_ratios(gaps: &[u64]) -> Vec<f64> {
    gaps.windows(2).map(|w| w[1] as f64 / w[0] as f64).collect()
}

/// Extrapolate the gap cascade one step past the last seed.
///
/// Applies only when the final gap is `12 × m` for a prime multiplier `m`;
/// the predicted next gap is `12 ×` the next prime after `m`. Returns `None`
/// when the cascade shape is absent.
pub fn termination_check(seeds: &[u64]) -> Option<Termination> {
    let last_seed = *seeds.last()?;
    let gaps = gap_sequence(seeds);
    let last_gap = *gaps.last()?;

    if last_gap % 12 != 0 {
        return None;
    }
    let multiplier = last_gap / 12;
    if !is_prime(multiplier) {
        return None;
    }

    let next_multiplier = (multiplier + 1..).find(|&m| is_prime(m))?;
    let next_gap = 12 * next_multiplier;
    let candidate = last_seed + next_gap;
    let candidate_is_prime = is_prime(candidate);

    Some(Termination {
        next_gap,
        candidate,
        candidate_is_prime,
        factor_pair: if candidate_is_prime {
            None
        } else {
            smallest_factor_pair(candidate)
        },
    })
}
