//! Utility functions and helpers.
//!
//! This module contains the size formatting helpers used when printing results.

pub mod size;

pub use size::{GB, KB, MB, format_size};
