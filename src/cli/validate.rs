//! `--mode validate`: check a manifest and report every issue.
//!
//! Validation is purely local; no network request is made.
//!
//! # Exit Status
//!
//! - `0`: no Error-severity issues (and no warnings with `--strict`)
//! - `1`: at least one failing issue
//!
//! # Examples
//!
//! ```bash
//! caskwatch --manifest myampswitcher.toml --mode validate
//! caskwatch --manifest myampswitcher.toml --mode validate --strict --format json
//! ```

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::output::{self, OutputOptions, ValidationReport};
use crate::core::CaskwatchError;
use crate::manifest::ReleaseManifest;

/// Validate `manifest`, print the report, and fail if it is invalid.
///
/// # Errors
///
/// Returns [`CaskwatchError::ValidationError`] when the report is invalid.
/// The report has already been printed at that point.
pub fn run(path: &Path, manifest: &ReleaseManifest, options: &OutputOptions) -> Result<()> {
    debug!("Validating manifest {}", path.display());

    let issues = manifest.validate();
    let report = ValidationReport::new(path, manifest, issues, options.strict);
    info!(
        "Validation of {} found {} error(s) and {} warning(s)",
        path.display(),
        report.errors,
        report.warnings
    );

    output::print_validation(&report, options)?;

    if !report.valid {
        return Err(CaskwatchError::ValidationError {
            errors: report.failing_count(options.strict),
        }
        .into());
    }

    Ok(())
}
