//! Configuration types for autounzip
//!
//! The daemon resolves three directories before the ingest loop starts:
//! the *input* directory being scanned, the *output* directory extracted
//! trees are created under, and the *backup* directory moved archives are
//! staged into. The backup directory is always derived as `<input>/_auz`
//! and is not independently configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Name of the backup directory nested inside the input directory
pub const BACKUP_DIR_NAME: &str = "_auz";

/// Configuration for the ingest loop
///
/// Serialized as JSON on disk. Every field has a default, so an empty file
/// (or no file at all) yields a working configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for incoming ZIP archives (default: `~/Downloads`)
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory extracted trees are created under (default: `~/_autounzip`)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Delay between scan cycles (default: 3 seconds)
    #[serde(default = "default_scan_interval")]
    pub scan_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            scan_interval: default_scan_interval(),
        }
    }
}

impl Config {
    /// The backup directory, derived from the input directory.
    pub fn backup_dir(&self) -> PathBuf {
        self.input_dir.join(BACKUP_DIR_NAME)
    }

    /// Default location of the configuration file (`~/autounzip.json`).
    pub fn default_path() -> PathBuf {
        home_dir().join("autounzip.json")
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Load configuration from a JSON file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Persist the resolved configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Reject configurations the ingest loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.input_dir == self.output_dir {
            return Err(Error::Config {
                message: "input-dir and output-dir must be different directories".into(),
                key: Some("output-dir".into()),
            });
        }
        if self.scan_interval.is_zero() {
            return Err(Error::Config {
                message: "scan-interval must be greater than zero".into(),
                key: Some("scan-interval".into()),
            });
        }
        Ok(())
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_input_dir() -> PathBuf {
    home_dir().join("Downloads")
}

fn default_output_dir() -> PathBuf {
    home_dir().join("_autounzip")
}

fn default_scan_interval() -> Duration {
    Duration::from_secs(3)
}
