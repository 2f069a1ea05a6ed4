//! Configuration file support for persistent defaults.
//!
//! This module loads an optional TOML file located at
//! `~/.config/path-size/config.toml` (or the platform-specific equivalent).
//! Values found there act as defaults that CLI flags can override.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//! Boolean flags can only be switched on from the command line, so a `true`
//! in the file cannot be turned off per invocation except by editing it.
//!
//! # Example config
//!
//! ```toml
//! recursive = true
//! human = true
//! all = false
//!
//! [scanning]
//! threads = 4
//!
//! [output]
//! quiet = false
//! json = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can tell which values the file actually
/// sets and layer them under the command line.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Descend into subdirectories by default
    pub recursive: Option<bool>,

    /// Print human-readable sizes by default
    pub human: Option<bool>,

    /// Count hidden entries by default
    pub all: Option<bool>,

    /// Traversal options
    #[serde(default)]
    pub scanning: FileScanConfig,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Traversal options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileScanConfig {
    /// Number of worker threads (0 = one per core)
    pub threads: Option<usize>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Suppress per-entry warnings
    pub quiet: Option<bool>,

    /// Emit JSON instead of a plain line
    pub json: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// `<config_dir>/path-size/config.toml`, where `<config_dir>` is the
    /// platform configuration directory (`~/.config` on Linux).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("path-size").join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or contains invalid TOML
    /// or unknown keys.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }
}
