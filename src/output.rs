//! Rendering of a computed size.
//!
//! A successful run prints one line, `<size>\t<path>`, or, with `--json`, a
//! single JSON object for scripting and piping. In JSON mode the warnings are
//! part of the document instead of being printed to stderr.

use std::path::Path;

use serde::Serialize;

use crate::{config::Policy, report::SizeReport, utils::format_size};

/// The plain output line for `path`, without the trailing newline.
#[must_use]
pub fn render_line(report: &SizeReport, path: &Path, policy: &Policy) -> String {
    format!(
        "{}\t{}",
        format_size(report.bytes, policy.human_readable),
        path.display()
    )
}

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The path exactly as it was given.
    pub path: String,

    /// Total size in bytes.
    pub bytes: u64,

    /// Size formatted according to the policy (e.g. `"1.5KB"` or `"1536B"`).
    pub size: String,

    /// Flags the size was computed with.
    pub policy: JsonPolicy,

    /// Entries that were skipped, one message per entry.
    pub warnings: Vec<String>,
}

/// The policy flags echoed back in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonPolicy {
    /// `--recursive`
    pub recursive: bool,

    /// `--human`
    pub human: bool,

    /// `--all`
    pub all: bool,
}

impl JsonOutput {
    /// Build the JSON document for one computed path.
    #[must_use]
    pub fn from_report(report: &SizeReport, path: &Path, policy: &Policy) -> Self {
        Self {
            path: path.display().to_string(),
            bytes: report.bytes,
            size: format_size(report.bytes, policy.human_readable),
            policy: JsonPolicy {
                recursive: policy.recursive,
                human: policy.human_readable,
                all: policy.include_hidden,
            },
            warnings: report.warnings.iter().map(|w| w.message.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Warning;
    use std::{io, path::PathBuf};

    #[test]
    fn test_render_line_raw() {
        let report = SizeReport::file(1536);
        let line = render_line(&report, Path::new("some/dir"), &Policy::default());
        assert_eq!(line, "1536B\tsome/dir");
    }

    #[test]
    fn test_render_line_human() {
        let report = SizeReport::file(1536);
        let policy = Policy::new(false, true, false);
        assert_eq!(render_line(&report, Path::new("f"), &policy), "1.5KB\tf");
    }

    #[test]
    fn test_json_output_fields() {
        let report = SizeReport::file(2048).merge(SizeReport::warning(Warning::metadata(
            PathBuf::from("d/x"),
            &io::Error::from(io::ErrorKind::NotFound),
        )));
        let policy = Policy::new(true, true, false);

        let output = JsonOutput::from_report(&report, Path::new("d"), &policy);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["path"], "d");
        assert_eq!(value["bytes"], 2048);
        assert_eq!(value["size"], "2.0KB");
        assert_eq!(value["policy"]["recursive"], true);
        assert_eq!(value["policy"]["human"], true);
        assert_eq!(value["policy"]["all"], false);
        assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_json_output_without_warnings() {
        let report = SizeReport::file(0);
        let output = JsonOutput::from_report(&report, Path::new("e"), &Policy::default());
        let json = serde_json::to_string(&output).unwrap();

        assert!(json.contains("\"size\":\"0B\""));
        assert!(json.contains("\"warnings\":[]"));
    }
}
