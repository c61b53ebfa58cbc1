//! ZIP archive extraction
//!
//! This module expands a staged archive into a freshly created output
//! directory. Entry enumeration order is whatever the container stores, so
//! parent directories are created defensively before every file write
//! rather than relying on directory entries arriving first.

mod zip;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

// Re-exports
pub use zip::ZipExtractor;
