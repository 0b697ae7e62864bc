//! Checkpointed scanning of an integer range for seed primes.
//!
//! The scanner owns the checkpoint record for the duration of one run:
//! it resumes from an existing record, classifies candidates one by one,
//! persists progress every `checkpoint_interval` candidates (and once more
//! at the end of the range), and deletes the record on completion.
//! Cancellation is cooperative and checked once per candidate, never in
//! the middle of classifying one.

use crate::checkpoint::{
    checkpoint_path, delete_checkpoint, load_checkpoint, save_checkpoint, CheckpointState,
};
use primeseed_core::classify::is_seed_prime;
use primeseed_core::error::Result;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Progress snapshot emitted at each checkpoint.
///
/// Observational only; nothing downstream consumes it.
#[derive(Debug, Clone)]
pub struct ScanProgress {
    /// Last candidate classified.
    pub current: u64,
    pub limit: u64,
    /// Seed primes found so far.
    pub seeds_found: usize,
    /// Portion of the range covered, in percent.
    pub percent: f64,
    /// Candidates classified per second since this run started.
    pub rate: f64,
    /// Estimated seconds until the range completes at the current rate.
    pub eta_secs: f64,
}

/// Terminal result of one scan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The whole range was scanned and the checkpoint file deleted.
    Complete { seeds: Vec<u64> },
    /// Cancelled mid-range. The in-memory seed list is returned, but only
    /// the checkpoint left on disk is authoritative for a future resume;
    /// it may lag up to `checkpoint_interval - 1` candidates behind.
    Suspended { seeds: Vec<u64>, last_checked: u64 },
}

/// Scans `[2, limit]` for seed primes with crash-safe resumability.
pub struct Scanner {
    limit: u64,
    interval: u64,
    dir: PathBuf,
    cancel: Arc<AtomicBool>,
}

impl Scanner {
    pub fn new(limit: u64, checkpoint_interval: u64) -> Self {
        Self {
            limit,
            interval: checkpoint_interval,
            dir: PathBuf::from("."),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Directory holding the checkpoint file (default: current directory).
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Cancellation flag; setting it suspends the scan at the next
    /// candidate boundary.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = flag;
        self
    }

    /// Path of the checkpoint file this scanner reads and writes.
    pub fn checkpoint_file(&self) -> PathBuf {
        checkpoint_path(&self.dir, self.limit)
    }

    /// Whether a checkpoint for this limit is already on disk.
    pub fn has_checkpoint(&self) -> bool {
        self.checkpoint_file().exists()
    }

    /// Run the scan, resuming from a checkpoint when one exists.
    ///
    /// `on_progress` is called once per checkpoint written. Resuming from a
    /// valid checkpoint produces a seed list identical to an uninterrupted
    /// run over the same range.
    pub fn run(&self, mut on_progress: impl FnMut(&ScanProgress)) -> Result<ScanOutcome> {
        let path = self.checkpoint_file();

        let (start, mut seeds) = match load_checkpoint(&path)? {
            Some(state) => (state.last_checked + 1, state.seeds_found),
            None => (2, Vec::new()),
        };

        let started = Instant::now();
        let mut last_checkpoint = start;

        for n in start..=self.limit {
            if self.cancel.load(Ordering::SeqCst) {
                return Ok(ScanOutcome::Suspended {
                    seeds,
                    last_checked: n - 1,
                });
            }

            if is_seed_prime(n) {
                seeds.push(n);
            }

            if n - last_checkpoint >= self.interval || n == self.limit {
                save_checkpoint(&path, &CheckpointState::new(n, seeds.clone()))?;
                on_progress(&self.progress(start, n, seeds.len(), &started));
                last_checkpoint = n;
            }
        }

        delete_checkpoint(&path)?;
        Ok(ScanOutcome::Complete { seeds })
    }

    fn progress(&self, start: u64, n: u64, seeds_found: usize, started: &Instant) -> ScanProgress {
        let elapsed = started.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            (n - start + 1) as f64 / elapsed
        } else {
            0.0
        };
        let eta_secs = if rate > 0.0 {
            (self.limit - n) as f64 / rate
        } else {
            0.0
        };
        ScanProgress {
            current: n,
            limit: self.limit,
            seeds_found,
            percent: n as f64 / self.limit as f64 * 100.0,
            rate,
            eta_secs,
        }
    }
}
