//! Checkpoint persistence — crash-safe scan progress records.
//!
//! One JSON file per search limit, holding the last classified candidate and
//! the complete ascending seed list up to it. The file's presence is the
//! sole resumability mechanism: absent means start fresh, present means
//! resume, and it is deleted only when the full range completes.

use chrono::{DateTime, Utc};
use primeseed_core::error::{PrimeseedError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted scan progress for one search limit.
///
/// Invariant: `seeds_found` is the exact, complete, ascending list of seed
/// primes in `[2, last_checked]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointState {
    pub last_checked: u64,
    pub seeds_found: Vec<u64>,
    pub timestamp: DateTime<Utc>,
}

impl CheckpointState {
    pub fn new(last_checked: u64, seeds_found: Vec<u64>) -> Self {
        Self {
            last_checked,
            seeds_found,
            timestamp: Utc::now(),
        }
    }
}

/// Checkpoint file path for a given search limit.
///
/// The limit is embedded in the file name, so a checkpoint can never be
/// resumed against a different limit.
pub fn checkpoint_path(dir: &Path, limit: u64) -> PathBuf {
    dir.join(format!("seed_primes_checkpoint_{}.json", limit))
}

/// Write a checkpoint record.
///
/// Serializes to a complete buffer and commits with a rename, so a reader
/// never observes a partially written record.
pub fn save_checkpoint(path: &Path, state: &CheckpointState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).map_err(|e| {
        PrimeseedError::checkpoint_save_failed(path.display().to_string(), e.to_string())
    })?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(|e| {
        PrimeseedError::checkpoint_save_failed(tmp.display().to_string(), e.to_string())
    })?;
    std::fs::rename(&tmp, path).map_err(|e| {
        PrimeseedError::checkpoint_save_failed(path.display().to_string(), e.to_string())
    })?;
    Ok(())
}

/// Load a checkpoint record if one exists.
///
/// Returns `Ok(None)` when no file is present (start fresh). An unreadable
/// or unparseable file is fatal: a resume point is never guessed, since an
/// invented `last_checked` would silently break the seed list's
/// completeness guarantee.
pub fn load_checkpoint(path: &Path) -> Result<Option<CheckpointState>> {
    if !path.exists() {
        return Ok(None);
    }
    let json = std::fs::read_to_string(path).map_err(|e| {
        PrimeseedError::checkpoint_load_failed(path.display().to_string(), e.to_string())
    })?;
    let state = serde_json::from_str(&json).map_err(|e| {
        PrimeseedError::checkpoint_corrupt(path.display().to_string(), e.to_string())
    })?;
    Ok(Some(state))
}

/// Remove the checkpoint file after a completed run. Missing files are fine.
pub fn delete_checkpoint(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use primeseed_core::error::{CheckpointError, PrimeseedError};

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = checkpoint_path(dir.path(), 1000);

        let state = CheckpointState::new(500, vec![2, 3, 5, 7, 11, 23, 83, 167]);
        save_checkpoint(&path, &state).unwrap();

        let loaded = load_checkpoint(&path).unwrap().expect("file exists");
        assert_eq!(loaded.last_checked, 500);
        assert_eq!(loaded.seeds_found, state.seeds_found);
    }

    #[test]
    fn wire_format_is_flat_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = checkpoint_path(dir.path(), 42);
        save_checkpoint(&path, &CheckpointState::new(40, vec![2, 3])).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["last_checked"], 40);
        assert_eq!(value["seeds_found"], serde_json::json!([2, 3]));
        // ISO-8601 timestamp string
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn missing_file_means_fresh_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = checkpoint_path(dir.path(), 1000);
        assert!(load_checkpoint(&path).unwrap().is_none());
    }

    #[test]
    fn corrupt_file_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let path = checkpoint_path(dir.path(), 1000);
        std::fs::write(&path, "{\"last_checked\": 12, \"seeds_fo").unwrap();

        match load_checkpoint(&path) {
            Err(PrimeseedError::Checkpoint(CheckpointError::Corrupt { .. })) => {}
            other => panic!("expected Corrupt, got {:?}", other),
        }
    }

    #[test]
    fn no_partial_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = checkpoint_path(dir.path(), 7);
        save_checkpoint(&path, &CheckpointState::new(5, vec![2, 3, 5])).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = checkpoint_path(dir.path(), 9);
        save_checkpoint(&path, &CheckpointState::new(9, vec![2, 3, 5, 7])).unwrap();
        delete_checkpoint(&path).unwrap();
        assert!(!path.exists());
        delete_checkpoint(&path).unwrap();
    }

    #[test]
    fn path_embeds_limit() {
        let path = checkpoint_path(Path::new("."), 123456);
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "seed_primes_checkpoint_123456.json"
        );
    }
}
