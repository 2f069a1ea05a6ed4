//! # path-size
//!
//! Library behind the `path-size` command: measure the apparent size of a
//! file or directory tree and format it as raw bytes or a human-readable
//! binary unit.
//!
//! ## Main Parts
//!
//! - [`calculator`] - walks a path under a [`Policy`] and sums byte lengths
//! - [`utils::size`] - turns a byte count into `"1536B"` or `"1.5KB"`
//! - [`report`] - the byte total plus non-fatal per-entry warnings
//! - [`error`] - fatal failures, each naming the offending path
//! - [`config`] - the [`Policy`] flags and the optional config file
//! - [`output`] - plain and JSON rendering of a result
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use path_size::{Policy, compute_size, format_size};
//!
//! let policy = Policy::new(true, true, false);
//! let report = compute_size(Path::new("."), &policy)?;
//! println!("{}", format_size(report.bytes, policy.human_readable));
//! # Ok::<(), path_size::SizeError>(())
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod utils;

pub use calculator::{compute_size, get_path_size};
pub use config::{FileConfig, Policy};
pub use error::SizeError;
pub use report::{SizeReport, Warning};
pub use utils::format_size;
