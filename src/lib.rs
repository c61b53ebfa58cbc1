//! # autounzip
//!
//! Background service that watches a directory for incoming ZIP archives,
//! moves each one into a backup directory, and extracts its contents into a
//! per-archive output directory.
//!
//! ## Design Philosophy
//!
//! - **Move before extract** - a candidate is renamed out of the input
//!   directory first, so the backup copy is the only live copy once
//!   extraction starts
//! - **One archive at a time** - a single sequential loop, no parallel
//!   extraction
//! - **Self-healing by rescan** - nothing is retried within a cycle; the next
//!   scan picks up whatever is still sitting in the input directory
//! - **Library-first** - the daemon binary is a thin shell around
//!   [`IngestLoop`]; consumers can embed the loop and subscribe to events
//!
//! ## Quick Start
//!
//! ```no_run
//! use autounzip::{Config, IngestLoop};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let ingest = IngestLoop::new(config);
//!
//!     // Subscribe to events
//!     let mut events = ingest.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("Event: {:?}", event);
//!         }
//!     });
//!
//!     // Keep a stop handle, then run the loop on its own task
//!     let cancel = ingest.cancellation_token();
//!     let handle = tokio::spawn(async move { ingest.run().await });
//!
//!     // ... later, from anywhere:
//!     cancel.cancel();
//!     handle.await??;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// ZIP archive extraction
pub mod extraction;
/// The scan-move-extract ingest loop
pub mod ingest;
/// Events emitted while archives are processed
pub mod types;
/// Pure helpers for candidate naming
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, ExtractError, Result};
pub use extraction::ZipExtractor;
pub use ingest::IngestLoop;
pub use types::Event;

/// Run the ingest loop with graceful signal handling.
///
/// Spawns the loop, waits for a termination signal, and cancels the loop so
/// it exits after its current cycle.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with a Ctrl+C fallback if
///   signal registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// # Example
///
/// ```no_run
/// use autounzip::{Config, IngestLoop, run_with_shutdown};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ingest = IngestLoop::new(Config::default());
///     run_with_shutdown(ingest).await?;
///     Ok(())
/// }
/// ```
pub async fn run_with_shutdown(ingest: IngestLoop) -> Result<()> {
    let cancel = ingest.cancellation_token();
    let handle = tokio::spawn(async move { ingest.run().await });

    wait_for_signal().await;
    cancel.cancel();

    match handle.await {
        Ok(result) => result,
        Err(e) => Err(Error::Other(format!("ingest loop task failed: {e}"))),
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Signal registration may fail in restricted environments (containers, tests)
    match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        _ => {
            tracing::warn!("Could not register unix signal handlers, using ctrl_c fallback");
            tokio::signal::ctrl_c().await.ok();
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
