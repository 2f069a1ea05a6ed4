//! Size computation for files and directory trees.
//!
//! This module walks a path with `walkdir` and sums the apparent byte length
//! of what it finds under a [`Policy`]. The walk only lists entries; their
//! metadata is then read in parallel and the partial [`SizeReport`]s merged,
//! so no counter is shared between threads.
//!
//! ## Link handling
//!
//! The path passed in is resolved through symbolic links: a link to a file
//! reports the file's length and a link to a directory is measured as that
//! directory. Links found *inside* a directory are not followed; they count
//! as their own length and are never descended into, which also rules out
//! link cycles during recursion.

use std::{fs, io, path::Path};

use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::Policy,
    error::SizeError,
    report::{SizeReport, Warning},
    utils::format_size,
};

/// Compute the size of `path` under `policy`.
///
/// A non-directory is measured directly; `recursive` and `include_hidden`
/// only apply to the contents of a directory. Inside a directory, hidden
/// entries are skipped unless `include_hidden` is set, subdirectories
/// contribute zero unless `recursive` is set, and everything else
/// contributes its length.
///
/// Entries that cannot be measured (metadata unavailable, subdirectory
/// unreadable) contribute zero and are listed in [`SizeReport::warnings`],
/// sorted by path.
///
/// # Errors
///
/// - [`SizeError::Stat`] if `path` itself cannot be stat'ed
/// - [`SizeError::ReadDir`] if `path` is a directory that cannot be listed
///
/// # Examples
///
/// ```no_run
/// # use std::path::Path;
/// # use path_size::{calculator::compute_size, config::Policy};
/// let report = compute_size(Path::new("src"), &Policy::new(true, false, false))?;
/// println!("{} bytes", report.bytes);
/// # Ok::<(), path_size::error::SizeError>(())
/// ```
pub fn compute_size(path: &Path, policy: &Policy) -> Result<SizeReport, SizeError> {
    let metadata = fs::metadata(path).map_err(|source| SizeError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Ok(SizeReport::file(metadata.len()));
    }

    let mut report = directory_size(path, policy)?;
    report.warnings.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(report)
}

/// Compute the size of `path` and format it according to `policy`.
///
/// Warnings collected on the way are dropped; use [`compute_size`] when they
/// matter.
///
/// # Errors
///
/// Same as [`compute_size`].
pub fn get_path_size(path: &Path, policy: &Policy) -> Result<String, SizeError> {
    let report = compute_size(path, policy)?;
    Ok(format_size(report.bytes, policy.human_readable))
}

/// Sum the counted entries below the directory `root`.
///
/// Shallow mode stops the walk at the root's direct children; hidden entries
/// are pruned together with everything beneath them.
fn directory_size(root: &Path, policy: &Policy) -> Result<SizeReport, SizeError> {
    let max_depth = if policy.recursive { usize::MAX } else { 1 };
    let include_hidden = policy.include_hidden;

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(move |entry| {
            entry.depth() == 0 || include_hidden || !is_hidden(entry)
        });

    tally(root, walker)
}

/// Fold the items of a walk below `root` into a report.
///
/// An error at depth 0 means `root` itself could not be listed and is
/// returned. Deeper errors lose only their subtree and become warnings.
/// Directories weigh nothing themselves; the remaining entries are measured
/// in parallel.
fn tally<I>(root: &Path, items: I) -> Result<SizeReport, SizeError>
where
    I: IntoIterator<Item = walkdir::Result<DirEntry>>,
{
    let mut files = Vec::new();
    let mut skipped = SizeReport::default();

    for item in items {
        match item {
            Ok(entry) if entry.file_type().is_dir() => {}
            Ok(entry) => files.push(entry),
            Err(err) if err.depth() == 0 => {
                return Err(SizeError::ReadDir {
                    path: root.to_path_buf(),
                    source: io_source(err),
                });
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                let failed = SizeError::ReadDir {
                    path,
                    source: io_source(err),
                };
                skipped = skipped.merge(SizeReport::warning(Warning::subtree(&failed)));
            }
        }
    }

    Ok(files
        .par_iter()
        .map(entry_size)
        .reduce(SizeReport::default, SizeReport::merge)
        .merge(skipped))
}

/// Contribution of a single non-directory entry.
fn entry_size(entry: &DirEntry) -> SizeReport {
    match entry.metadata() {
        Ok(metadata) => SizeReport::file(metadata.len()),
        Err(err) => SizeReport::warning(Warning::metadata(
            entry.path().to_path_buf(),
            &io_source(err),
        )),
    }
}

/// The I/O error behind a walk error.
fn io_source(err: walkdir::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other(message))
}

/// Whether an entry's file name marks it hidden (leading `.`).
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .as_encoded_bytes()
        .first()
        .is_some_and(|&b| b == b'.')
}
