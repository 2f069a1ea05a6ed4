//! Command-line interface definition and argument parsing.
//!
//! This module defines the arguments and options of `path-size` using
//! [clap](https://docs.rs/clap/). Helper methods on [`Cli`] accept a
//! [`FileConfig`] reference so that config-file values act as defaults that
//! CLI arguments can override (layered config).

use std::path::{Path, PathBuf};

use clap::Parser;

use path_size::config::{FileConfig, Policy};

/// Command-line arguments controlling how the size is computed.
#[derive(Parser)]
struct PolicyArgs {
    /// Calculate size recursively (for directories)
    ///
    /// Without this flag, subdirectories of the given directory count as zero
    /// and only the files directly inside it are summed.
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Show sizes in human-readable format (B, KB, MB, GB)
    ///
    /// Uses binary multiples (1 KB = 1024 bytes) with one decimal digit.
    #[arg(short = 'H', long)]
    human: bool,

    /// Include hidden files and directories (starting with .)
    #[arg(short = 'a', long)]
    all: bool,
}

/// Command-line arguments controlling traversal and output.
#[derive(Parser)]
struct RunArgs {
    /// The number of threads to use for directory traversal
    ///
    /// A value of 0 uses the default number of threads (typically the number of CPU cores).
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Do not print warnings about entries that could not be measured
    ///
    /// Skipped entries still contribute zero bytes; only the messages are hidden.
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Output the result as a JSON object for scripting/piping
    ///
    /// Warnings are included in the JSON document instead of being printed
    /// to stderr.
    #[arg(long)]
    json: bool,

    /// Read defaults from this config file instead of the standard location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values
/// act as defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "path-size")]
#[command(about = "Print the size of a file or directory")]
#[command(
    long_about = "Print the size of a file or directory.\n\nSupports recursive calculation, \
                  human-readable output and hidden files."
)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// File or directory to measure
    path: PathBuf,

    /// Size computation options
    #[command(flatten)]
    policy: PolicyArgs,

    /// Traversal and output options
    #[command(flatten)]
    run: RunArgs,
}

impl Cli {
    /// The path to measure, exactly as given.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Explicit config file passed with `--config`, if any.
    #[must_use]
    pub fn config_file(&self) -> Option<&Path> {
        self.run.config.as_deref()
    }

    /// Extract the size policy from CLI args and config file.
    ///
    /// For each flag, the CLI flag (if set) takes priority, then the config
    /// file value, then `false`.
    #[must_use]
    pub fn policy(&self, config: &FileConfig) -> Policy {
        Policy {
            recursive: self.policy.recursive || config.recursive.unwrap_or(false),
            human_readable: self.policy.human || config.human.unwrap_or(false),
            include_hidden: self.policy.all || config.all.unwrap_or(false),
        }
    }

    /// Number of traversal threads: CLI > config > `0` (all cores).
    #[must_use]
    pub fn threads(&self, config: &FileConfig) -> usize {
        self.run.threads.or(config.scanning.threads).unwrap_or(0)
    }

    /// Whether warnings are suppressed: CLI flag `||` config value `||` `false`.
    #[must_use]
    pub fn quiet(&self, config: &FileConfig) -> bool {
        self.run.quiet || config.output.quiet.unwrap_or(false)
    }

    /// Whether `--json` structured output is enabled (CLI or config).
    #[must_use]
    pub fn json(&self, config: &FileConfig) -> bool {
        self.run.json || config.output.json.unwrap_or(false)
    }
}
