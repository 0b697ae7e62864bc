//! End-to-end resumability tests for the checkpointed scanner.
//!
//! The core guarantee under test: resuming from any valid checkpoint
//! produces a seed list identical to an uninterrupted run over the same
//! range, and the checkpoint file's lifecycle (retained on suspension,
//! deleted on completion) holds across real suspend/resume cycles.

use primeseed_core::types::SEED_PRIMES;
use primeseed_search::checkpoint::{checkpoint_path, load_checkpoint, save_checkpoint, CheckpointState};
use primeseed_search::scanner::{ScanOutcome, Scanner};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn complete_seeds(outcome: ScanOutcome) -> Vec<u64> {
    match outcome {
        ScanOutcome::Complete { seeds } => seeds,
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn resumed_run_equals_uninterrupted_run() {
    let uninterrupted_dir = tempfile::tempdir().unwrap();
    let uninterrupted = complete_seeds(
        Scanner::new(1000, 100)
            .with_dir(uninterrupted_dir.path())
            .run(|_| {})
            .unwrap(),
    );

    // Pre-seed checkpoints at several intermediate points, each with the
    // correct seed prefix for its range, and check the final list is
    // identical every time.
    for last_checked in [10u64, 84, 166, 167, 500, 999] {
        let dir = tempfile::tempdir().unwrap();
        let path = checkpoint_path(dir.path(), 1000);
        let prefix: Vec<u64> = SEED_PRIMES
            .iter()
            .copied()
            .filter(|&s| s <= last_checked)
            .collect();
        save_checkpoint(&path, &CheckpointState::new(last_checked, prefix)).unwrap();

        let resumed = complete_seeds(
            Scanner::new(1000, 100)
                .with_dir(dir.path())
                .run(|_| {})
                .unwrap(),
        );
        assert_eq!(
            resumed, uninterrupted,
            "resume from {} diverged",
            last_checked
        );
        assert!(!path.exists(), "checkpoint should be deleted on completion");
    }
}

#[test]
fn suspend_then_resume_completes_correctly() {
    let dir = tempfile::tempdir().unwrap();
    let cancel = Arc::new(AtomicBool::new(false));

    // Trip the cancellation flag from the progress callback, so the scan
    // suspends right after its first periodic checkpoint.
    let trip = Arc::clone(&cancel);
    let outcome = Scanner::new(1000, 100)
        .with_dir(dir.path())
        .with_cancel_flag(Arc::clone(&cancel))
        .run(move |_| trip.store(true, Ordering::SeqCst))
        .unwrap();

    let path = checkpoint_path(dir.path(), 1000);
    match outcome {
        ScanOutcome::Suspended {
            seeds,
            last_checked,
        } => {
            assert!(last_checked < 1000);
            // The checkpoint is authoritative and consistent with the
            // partial in-memory list.
            let state = load_checkpoint(&path).unwrap().expect("checkpoint retained");
            assert_eq!(state.seeds_found, seeds);
            assert!(state.last_checked <= last_checked);
        }
        other => panic!("expected suspension, got {:?}", other),
    }

    // A fresh scanner picks the checkpoint up and finishes the range.
    let resumed = complete_seeds(
        Scanner::new(1000, 100)
            .with_dir(dir.path())
            .run(|_| {})
            .unwrap(),
    );
    assert_eq!(resumed, SEED_PRIMES.to_vec());
    assert!(!path.exists());
}

#[test]
fn corrupt_checkpoint_refuses_to_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = checkpoint_path(dir.path(), 1000);
    std::fs::write(&path, "not a checkpoint").unwrap();

    let result = Scanner::new(1000, 100).with_dir(dir.path()).run(|_| {});
    assert!(result.is_err(), "corrupt checkpoint must fail loudly");

    // The file is left untouched for the operator to inspect.
    assert!(path.exists());
}

#[test]
fn different_limits_use_different_checkpoints() {
    let dir = tempfile::tempdir().unwrap();

    // A retained checkpoint for limit 500 must not affect a limit-1000 run.
    let path_500 = checkpoint_path(dir.path(), 500);
    save_checkpoint(&path_500, &CheckpointState::new(400, vec![2, 3, 5, 7, 11, 23, 83, 167]))
        .unwrap();

    let seeds = complete_seeds(
        Scanner::new(1000, 100)
            .with_dir(dir.path())
            .run(|_| {})
            .unwrap(),
    );
    assert_eq!(seeds, SEED_PRIMES.to_vec());
    assert!(path_500.exists(), "unrelated checkpoint left alone");
}
