//! Report structures and their text/JSON rendering.
//!
//! Reports go to stdout; logs, spinners and errors go to stderr, so the JSON
//! form can be piped straight into `jq`.
//!
//! # JSON Output Examples
//!
//! `--mode validate`:
//!
//! ```json
//! {
//!   "manifest": "myampswitcher.toml",
//!   "name": "MyAmpSwitcher",
//!   "valid": false,
//!   "errors": 1,
//!   "warnings": 0,
//!   "issues": [
//!     {
//!       "field": "sha256",
//!       "severity": "error",
//!       "kind": "invalid_checksum",
//!       "message": "expected \"no_check\" or a 64-character hex SHA-256 digest, got 6 character(s)"
//!     }
//!   ]
//! }
//! ```
//!
//! `--mode check`:
//!
//! ```json
//! {
//!   "name": "MyAmpSwitcher",
//!   "current_version": "1.9.0",
//!   "newest": { "tag": "v2.0.0", "asset_name": "MyAmpSwitcher.dmg" },
//!   "status": "outdated",
//!   "livecheck_url": "https://api.github.com/repos/paolofrigo/my-amp-switcher/releases",
//!   "releases": [ ... ],
//!   "checked_at": "2025-01-01T12:00:00Z"
//! }
//! ```

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::manifest::{ExtractedRelease, ReleaseManifest, Severity, ValidationIssue, error_count};
use crate::version::UpdateStatus;

/// How reports are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colored ✓/✗/⚠ markers.
    Text,

    /// A single pretty-printed JSON object, for automation.
    Json,
}

/// Output settings shared by both modes.
#[derive(Clone, Copy, Debug)]
pub struct OutputOptions {
    /// Text or JSON
    pub format: OutputFormat,
    /// Print per-release details in check mode
    pub verbose: bool,
    /// Print errors only
    pub quiet: bool,
    /// Count validation warnings as failures
    pub strict: bool,
    /// Allow the fetch spinner
    pub progress: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
            quiet: false,
            strict: false,
            progress: true,
        }
    }
}

impl OutputOptions {
    /// Whether a spinner may be drawn. JSON and quiet output never show one.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.progress && !self.quiet && self.format == OutputFormat::Text
    }
}

/// Outcome of `--mode validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Manifest path as given on the command line
    pub manifest: String,
    /// Manifest `name`, possibly empty
    pub name: String,
    /// Whether validation passed (warnings fail it in strict mode)
    pub valid: bool,
    /// Number of Error-severity issues
    pub errors: usize,
    /// Number of Warning-severity issues
    pub warnings: usize,
    /// Every issue, in the order they were found
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Summarize `issues` found in `manifest`.
    #[must_use]
    pub fn new(
        path: &Path,
        manifest: &ReleaseManifest,
        issues: Vec<ValidationIssue>,
        strict: bool,
    ) -> Self {
        let errors = error_count(&issues);
        let warnings = issues.len() - errors;
        let valid = errors == 0 && !(strict && warnings > 0);

        Self {
            manifest: path.display().to_string(),
            name: manifest.name.clone(),
            valid,
            errors,
            warnings,
            issues,
        }
    }

    /// Issues that make the report invalid under the given strictness.
    #[must_use]
    pub const fn failing_count(&self, strict: bool) -> usize {
        if strict { self.errors + self.warnings } else { self.errors }
    }
}

/// Outcome of `--mode check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Manifest `name`
    pub name: String,
    /// Manifest `version`
    pub current_version: String,
    /// The newest release found
    pub newest: ExtractedRelease,
    /// How `current_version` relates to `newest`
    pub status: UpdateStatus,
    /// Endpoint that was polled
    pub livecheck_url: String,
    /// Every release found, in document order
    pub releases: Vec<ExtractedRelease>,
    /// When the endpoint was polled
    pub checked_at: DateTime<Utc>,
}

/// Print a validation report.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn print_validation(report: &ValidationReport, options: &OutputOptions) -> Result<()> {
    if options.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for issue in &report.issues {
        match issue.severity {
            Severity::Error => println!("{} {}", "✗".red(), issue),
            Severity::Warning if !options.quiet => println!("{} {}", "⚠".yellow(), issue),
            Severity::Warning => {}
        }
    }

    if options.quiet {
        return Ok(());
    }

    let label = if report.name.trim().is_empty() {
        report.manifest.clone()
    } else {
        report.name.clone()
    };

    if report.valid {
        if report.warnings == 0 {
            println!("{} {} is valid", "✓".green(), label.bold());
        } else {
            println!("{} {} is valid with {} warning(s)", "✓".green(), label.bold(), report.warnings);
        }
    } else if report.errors == 0 {
        println!("{} Strict mode: warnings treated as errors", "✗".red());
    }

    Ok(())
}

/// Print a check report.
///
/// Text output follows the familiar `name: current ==> newest` form, with
/// the newest tag highlighted when it is an update.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn print_check(report: &CheckReport, options: &OutputOptions) -> Result<()> {
    if options.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let newest = if report.status.is_outdated() {
        report.newest.tag.green().bold().to_string()
    } else {
        report.newest.tag.clone()
    };
    println!("{}: {} ==> {}", report.name.bold(), report.current_version, newest);

    if options.verbose && !options.quiet {
        println!("  status: {}", report.status);
        if let Some(name) = &report.newest.asset_name {
            println!("  asset: {name}");
        }
        if let Some(url) = &report.newest.asset_url {
            println!("  download: {url}");
        }
        println!("  releases found: {}", report.releases.len());
        for release in &report.releases {
            println!("    {}", release.tag.dimmed());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::IssueKind;

    fn manifest() -> ReleaseManifest {
        ReleaseManifest {
            name: "ExampleApp".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_report_counts() {
        let issues = vec![
            ValidationIssue::error("url", IssueKind::InvalidUrl, "bad"),
            ValidationIssue::warning("version", IssueKind::InvalidVersion, "odd"),
            ValidationIssue::warning("version", IssueKind::InvalidVersion, "odd again"),
        ];
        let report = ValidationReport::new(Path::new("app.toml"), &manifest(), issues, false);

        assert!(!report.valid);
        assert_eq!(report.errors, 1);
        assert_eq!(report.warnings, 2);
        assert_eq!(report.failing_count(false), 1);
        assert_eq!(report.failing_count(true), 3);
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let issues = vec![ValidationIssue::warning("version", IssueKind::InvalidVersion, "odd")];

        let lenient =
            ValidationReport::new(Path::new("app.toml"), &manifest(), issues.clone(), false);
        assert!(lenient.valid);

        let strict = ValidationReport::new(Path::new("app.toml"), &manifest(), issues, true);
        assert!(!strict.valid);
    }

    #[test]
    fn test_report_json_shape() {
        let issues = vec![ValidationIssue::error("sha256", IssueKind::InvalidChecksum, "bad")];
        let report = ValidationReport::new(Path::new("app.toml"), &manifest(), issues, false);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"], 1);
        assert_eq!(json["issues"][0]["field"], "sha256");
        assert_eq!(json["issues"][0]["severity"], "error");
        assert_eq!(json["issues"][0]["kind"], "invalid_checksum");
    }

    #[test]
    fn test_show_progress() {
        assert!(OutputOptions::default().show_progress());

        let json = OutputOptions {
            format: OutputFormat::Json,
            ..Default::default()
        };
        assert!(!json.show_progress());

        let quiet = OutputOptions {
            quiet: true,
            ..Default::default()
        };
        assert!(!quiet.show_progress());
    }
}
