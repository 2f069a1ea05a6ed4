//! # path-size
//!
//! Print the size of a file or directory, as raw bytes or in a
//! human-readable binary unit.
//!
//! ## Usage
//!
//! ```bash
//! # Files directly inside a directory
//! path-size ~/Downloads
//!
//! # Whole tree, hidden entries included, scaled to KB/MB/GB
//! path-size -r -a -H ~/Projects
//!
//! # Machine-readable
//! path-size --json -r .
//! ```
//!
//! Defaults for every flag can be stored in
//! `~/.config/path-size/config.toml`.

mod cli;

use std::process::exit;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use path_size::{
    FileConfig, compute_size,
    output::{JsonOutput, render_line},
};

/// Entry point for the path-size application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, layers them over the config file, computes the size and
/// prints it.
///
/// # Errors
///
/// Returns errors from an explicit `--config` file, thread-pool
/// configuration, the size computation or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = match args.config_file() {
        Some(path) => FileConfig::load_from(path)?,
        None => load_config(),
    };

    let policy = args.policy(&file_config);
    let threads = args.threads(&file_config);
    let json_mode = args.json(&file_config);
    let quiet = args.quiet(&file_config);

    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let report = compute_size(args.path(), &policy)?;

    if json_mode {
        let output = JsonOutput::from_report(&report, args.path(), &policy);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !quiet {
        for warning in &report.warnings {
            eprintln!("{}", warning.to_string().yellow());
        }
    }

    println!("{}", render_line(&report, args.path(), &policy));
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}
