//! Events emitted while archives are processed
//!
//! The ingest loop broadcasts an [`Event`] at each observable step of a
//! cycle. Consumers subscribe via [`crate::IngestLoop::subscribe`]; events
//! are diagnostic and lossy (a lagging receiver misses old events), the
//! functional contract is the filesystem state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Progress event broadcast by the ingest loop
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Candidate archives found at the start of a cycle
    Discovered {
        /// Number of candidates in the input directory
        count: usize,
    },

    /// An existing backup copy with the same name is about to be replaced
    BackupOverwritten {
        /// Path of the stale backup copy
        path: PathBuf,
    },

    /// Candidate moved from the input directory into the backup directory
    Moved {
        /// Original file name of the archive
        name: String,
        /// Where the backup copy now lives
        backup_path: PathBuf,
    },

    /// Candidate skipped for this cycle because the move to backup failed
    Skipped {
        /// Original file name of the archive
        name: String,
        /// Why the move failed
        reason: String,
    },

    /// Archive fully extracted into its output directory
    Extracted {
        /// Original file name of the archive
        name: String,
        /// Directory the contents were written into
        output_dir: PathBuf,
        /// Number of files written
        file_count: usize,
    },

    /// A hard error aborted the remainder of the cycle's batch
    CycleFailed {
        /// Rendered error message
        error: String,
    },
}
