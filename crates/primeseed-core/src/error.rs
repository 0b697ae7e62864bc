//! Error types for primeseed operations.
//!
//! Provides structured error handling instead of panics.

use std::error::Error;
use std::fmt;

/// Result type for primeseed operations.
pub type Result<T> = std::result::Result<T, PrimeseedError>;

/// Errors that can occur during primeseed operations.
#[derive(Debug, Clone)]
pub enum PrimeseedError {
    /// Checkpoint-related errors.
    Checkpoint(CheckpointError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for PrimeseedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimeseedError::Checkpoint(e) => write!(f, "Checkpoint error: {}", e),
            PrimeseedError::Io(msg) => write!(f, "I/O error: {}", msg),
            PrimeseedError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for PrimeseedError {}

impl From<std::io::Error> for PrimeseedError {
    fn from(e: std::io::Error) -> Self {
        PrimeseedError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for PrimeseedError {
    fn from(e: serde_json::Error) -> Self {
        PrimeseedError::Serialization(e.to_string())
    }
}

/// Checkpoint-related errors.
///
/// A damaged checkpoint is always fatal: inventing a resume point would
/// silently break the completeness guarantee of the seed list.
#[derive(Debug, Clone)]
pub enum CheckpointError {
    /// Checkpoint file exists but cannot be read.
    LoadFailed { path: String, reason: String },
    /// Checkpoint file contents are not a valid record.
    Corrupt { path: String, reason: String },
    /// Checkpoint file could not be written.
    SaveFailed { path: String, reason: String },
}

impl fmt::Display for CheckpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckpointError::LoadFailed { path, reason } => {
                write!(f, "Failed to read {}: {}", path, reason)
            }
            CheckpointError::Corrupt { path, reason } => {
                write!(
                    f,
                    "Corrupt record in {}: {} (delete the file to start fresh)",
                    path, reason
                )
            }
            CheckpointError::SaveFailed { path, reason } => {
                write!(f, "Failed to write {}: {}", path, reason)
            }
        }
    }
}

// Convenience constructors
impl PrimeseedError {
    pub fn checkpoint_load_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        PrimeseedError::Checkpoint(CheckpointError::LoadFailed {
            path: path.into(),
            reason: reason.into(),
        })
    }

    pub fn checkpoint_corrupt(path: impl Into<String>, reason: impl Into<String>) -> Self {
        PrimeseedError::Checkpoint(CheckpointError::Corrupt {
            path: path.into(),
            reason: reason.into(),
        })
    }

    pub fn checkpoint_save_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        PrimeseedError::Checkpoint(CheckpointError::SaveFailed {
            path: path.into(),
            reason: reason.into(),
        })
    }
}
