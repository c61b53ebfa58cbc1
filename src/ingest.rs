//! The scan-move-extract ingest loop
//!
//! This is the daemon core: a single sequential worker that repeatedly scans
//! the input directory for `.zip` files, moves each candidate into the
//! backup directory, and extracts the backup copy into a per-archive output
//! directory.
//!
//! # Failure model
//!
//! - A failed move to backup is transient: the candidate is skipped for this
//!   cycle and picked up again on a later scan.
//! - A hard error after a successful move (corrupt archive, output directory
//!   collision, write failure) aborts the remainder of the batch; the loop
//!   logs it and resumes fresh on the next cycle. The moved archive stays in
//!   the backup directory and is *not* retried, because only the input
//!   directory is rescanned — a stuck backup with no matching output
//!   directory is the visible symptom and needs manual cleanup.
//!
//! # Example
//!
//! ```no_run
//! use autounzip::{Config, IngestLoop};
//!
//! # async fn example() -> autounzip::Result<()> {
//! let ingest = IngestLoop::new(Config::default());
//! let cancel = ingest.cancellation_token();
//!
//! let handle = tokio::spawn(async move { ingest.run().await });
//!
//! // ... later, from any task:
//! cancel.cancel();
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::error::Result;
use crate::extraction::ZipExtractor;
use crate::types::Event;
use crate::utils::{has_zip_suffix, strip_zip_suffix};
use std::path::{Path, PathBuf};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// The repeating scan-move-extract cycle
///
/// Owns the three watched directories for its lifetime. The only shared
/// mutable state is the cancellation token, observed at cycle boundaries and
/// during the inter-cycle delay.
pub struct IngestLoop {
    /// Resolved directories and scan interval, set once at construction
    config: Config,

    /// Backup directory, derived from the input directory
    backup_dir: PathBuf,

    /// Cooperative stop signal
    cancel: CancellationToken,

    /// Broadcast channel for progress events
    events: broadcast::Sender<Event>,
}

impl IngestLoop {
    /// Create a new ingest loop over the configured directories.
    ///
    /// Nothing touches the filesystem until [`run`](Self::run) (or
    /// [`bootstrap`](Self::bootstrap)) is called.
    pub fn new(config: Config) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let backup_dir = config.backup_dir();
        Self {
            config,
            backup_dir,
            cancel: CancellationToken::new(),
            events,
        }
    }

    /// Subscribe to progress events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Clone of the loop's cancellation token.
    ///
    /// Cancelling it stops the loop after its current batch, interrupting
    /// the inter-cycle delay without waiting it out.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Signal the loop to exit after its current cycle.
    pub fn request_stop(&self) {
        self.cancel.cancel();
    }

    /// Create the input, output, and backup directories if missing.
    ///
    /// Idempotent: re-running against existing directories is a no-op
    /// success.
    pub fn bootstrap(&self) -> Result<()> {
        for dir in [
            &self.config.input_dir,
            &self.config.output_dir,
            &self.backup_dir,
        ] {
            if !dir.is_dir() {
                std::fs::create_dir_all(dir)?;
                info!(path = %dir.display(), "created directory");
            }
        }
        Ok(())
    }

    /// Run the ingest loop until the cancellation token fires.
    ///
    /// Bootstraps the directories, then repeats scan-move-extract cycles
    /// separated by the configured delay. A hard batch error is logged and
    /// the loop carries on with the next cycle; only a bootstrap failure is
    /// fatal.
    pub async fn run(self) -> Result<()> {
        self.bootstrap()?;
        info!(
            input = %self.config.input_dir.display(),
            output = %self.config.output_dir.display(),
            backup = %self.backup_dir.display(),
            "ingest loop started"
        );

        loop {
            if self.cancel.is_cancelled() {
                break;
            }

            if let Err(e) = self.process_batch() {
                error!(error = %e, "batch aborted, remaining candidates wait for next scan");
                let _ = self.events.send(Event::CycleFailed {
                    error: e.to_string(),
                });
            }

            tokio::select! {
                _ = self.cancel.cancelled() => break,
                _ = tokio::time::sleep(self.config.scan_interval) => {}
            }
        }

        info!("ingest loop stopped");
        Ok(())
    }

    /// Run one scan-move-extract pass over the input directory.
    ///
    /// Returns `Err` on the first hard failure, leaving the remaining
    /// candidates for the next cycle.
    fn process_batch(&self) -> Result<()> {
        let candidates = self.scan_input()?;
        if candidates.is_empty() {
            debug!("no archives to process");
            return Ok(());
        }

        info!(count = candidates.len(), "archives to process");
        let _ = self.events.send(Event::Discovered {
            count: candidates.len(),
        });

        for path in candidates {
            self.process_candidate(&path)?;
        }
        Ok(())
    }

    /// Regular files directly in the input directory whose name ends with
    /// `.zip`, case-insensitively.
    ///
    /// Sorted for deterministic processing order; correctness does not
    /// depend on it.
    fn scan_input(&self) -> Result<Vec<PathBuf>> {
        let mut candidates = Vec::new();
        for entry in std::fs::read_dir(&self.config.input_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            match name.to_str() {
                Some(name) if has_zip_suffix(name) => candidates.push(entry.path()),
                _ => {}
            }
        }
        candidates.sort();
        Ok(candidates)
    }

    /// Stage one candidate into the backup directory and extract it.
    fn process_candidate(&self, path: &Path) -> Result<()> {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_owned(),
            // scan_input only yields UTF-8 file names
            None => return Ok(()),
        };
        info!(name = %name, "processing archive");

        let backup_path = self.backup_dir.join(&name);
        if backup_path.exists() {
            warn!(path = %backup_path.display(), "overwriting previous backup copy");
            let _ = self.events.send(Event::BackupOverwritten {
                path: backup_path.clone(),
            });
            if let Err(e) = std::fs::remove_file(&backup_path) {
                // Best effort: if the stale copy stays, the rename below
                // fails and the candidate is skipped for this cycle.
                debug!(error = %e, "could not remove stale backup copy");
            }
        }

        // Hand-off point: after a successful rename the backup copy is the
        // only live copy and extraction reads from it.
        if let Err(e) = std::fs::rename(path, &backup_path) {
            info!(name = %name, error = %e, "skipping archive, move to backup failed");
            let _ = self.events.send(Event::Skipped {
                name,
                reason: e.to_string(),
            });
            return Ok(());
        }
        let _ = self.events.send(Event::Moved {
            name: name.clone(),
            backup_path: backup_path.clone(),
        });

        let output_dir = self.config.output_dir.join(strip_zip_suffix(&name));
        let files = ZipExtractor::extract(&backup_path, &output_dir)?;

        info!(
            name = %name,
            output = %output_dir.display(),
            file_count = files.len(),
            "archive extracted"
        );
        let _ = self.events.send(Event::Extracted {
            name,
            output_dir,
            file_count: files.len(),
        });
        Ok(())
    }
}
