//! Size totals together with the non-fatal problems met while computing them.
//!
//! The calculator never prints anything. Each branch of a traversal returns a
//! [`SizeReport`], and parents fold their children's reports together with
//! [`SizeReport::merge`]. The caller decides what to do with the warnings.

use std::{fmt, path::PathBuf};

use crate::error::SizeError;

/// A recoverable problem with one entry during traversal.
///
/// The entry it refers to contributed zero bytes to the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Entry that could not be measured
    pub path: PathBuf,

    /// Human-readable description, already naming the path
    pub message: String,
}

impl Warning {
    /// Warning for an entry whose metadata could not be read.
    #[must_use]
    pub fn metadata(path: PathBuf, err: &std::io::Error) -> Self {
        let message = format!("can't stat '{}': {err}", path.display());
        Self { path, message }
    }

    /// Warning for a subdirectory whose size could not be computed.
    #[must_use]
    pub fn subtree(err: &SizeError) -> Self {
        Self {
            path: err.path().to_path_buf(),
            message: format!("skipping subtree: {err}"),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}", self.message)
    }
}

/// Byte total for a path plus every warning collected on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeReport {
    /// Accumulated apparent size in bytes
    pub bytes: u64,

    /// Entries that were skipped because they could not be measured
    pub warnings: Vec<Warning>,
}

impl SizeReport {
    /// Report for a single measured item.
    #[must_use]
    pub const fn file(bytes: u64) -> Self {
        Self {
            bytes,
            warnings: Vec::new(),
        }
    }

    /// Zero-byte report carrying one warning.
    #[must_use]
    pub fn warning(warning: Warning) -> Self {
        Self {
            bytes: 0,
            warnings: vec![warning],
        }
    }

    /// Combine two partial reports.
    #[must_use]
    pub fn merge(mut self, mut other: Self) -> Self {
        self.bytes = self.bytes.saturating_add(other.bytes);
        self.warnings.append(&mut other.warnings);
        self
    }

    /// `true` when nothing had to be skipped.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
