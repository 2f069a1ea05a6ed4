//! Fatal error types for size computation.
//!
//! Only failures that abort a computation live here. Problems with a single
//! entry inside a directory are recoverable and are reported as
//! [`Warning`](crate::report::Warning)s instead.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// A failure that prevents a size from being computed.
///
/// Every variant carries the path that caused it so the message alone is
/// enough for an operator to find the problem.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The path could not be stat'ed (missing, permission denied, link loop).
    #[error("cannot access '{}': {source}", path.display())]
    Stat {
        /// Path whose metadata could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A directory's contents could not be listed.
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        /// Directory that could not be listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl SizeError {
    /// The path this error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Stat { path, .. } | Self::ReadDir { path, .. } => path.as_path(),
        }
    }

    /// Whether the error means the path does not exist at all.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Stat { source, .. } | Self::ReadDir { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
            }
        }
    }
}
