//! Error types for autounzip
//!
//! The taxonomy mirrors how failures are handled by the ingest loop:
//! - a failed move to the backup directory is transient and never surfaces
//!   here (the candidate is skipped and rescanned later)
//! - [`ExtractError`] variants are hard per-cycle failures that abort the
//!   remainder of the current batch
//! - [`Error::Config`] is a startup failure reported before the loop begins

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for autounzip operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for autounzip
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "output-dir")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive extraction error
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Serialization error (config file read/write)
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Hard failures while staging or expanding one archive
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The backup copy could not be opened as a ZIP container
    #[error("failed to open archive {archive}: {reason}")]
    OpenFailed {
        /// The archive file that could not be opened
        archive: PathBuf,
        /// Why opening failed (corrupt data, truncated file, etc.)
        reason: String,
    },

    /// An entry could not be read or written
    #[error("extraction failed for {archive}: {reason}")]
    ExtractionFailed {
        /// The archive being extracted
        archive: PathBuf,
        /// Why extraction failed
        reason: String,
    },

    /// The per-archive output directory could not be created
    #[error("could not create output directory {path}: {reason}")]
    OutputDirFailed {
        /// The directory that could not be created
        path: PathBuf,
        /// Why creation failed (already exists, permission denied, etc.)
        reason: String,
    },
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_and_renders() {
        let err: Error = std::io::Error::other("disk fail").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: disk fail");
    }

    #[test]
    fn extract_error_converts_through_from() {
        let err: Error = ExtractError::OpenFailed {
            archive: PathBuf::from("/backup/broken.zip"),
            reason: "invalid central directory".into(),
        }
        .into();
        assert!(matches!(err, Error::Extract(ExtractError::OpenFailed { .. })));
        assert!(err.to_string().contains("/backup/broken.zip"));
    }

    #[test]
    fn output_dir_failed_names_the_directory() {
        let err = ExtractError::OutputDirFailed {
            path: PathBuf::from("/out/photos"),
            reason: "File exists".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("could not create output directory"));
        assert!(msg.contains("/out/photos"));
        assert!(msg.contains("File exists"));
    }

    #[test]
    fn config_error_renders_message() {
        let err = Error::Config {
            message: "input-dir and output-dir must differ".into(),
            key: Some("output-dir".into()),
        };
        assert_eq!(
            err.to_string(),
            "configuration error: input-dir and output-dir must differ"
        );
    }
}
