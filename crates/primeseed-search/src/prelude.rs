//! Primeseed Search Prelude — convenient imports for common usage.
//!
//! ```rust
//! use primeseed_search::prelude::*;
//! ```

// Re-export the scanner
pub use crate::scanner::{ScanOutcome, ScanProgress, Scanner};

// Re-export checkpoint persistence
pub use crate::checkpoint::{
    checkpoint_path, delete_checkpoint, load_checkpoint, save_checkpoint, CheckpointState,
};
