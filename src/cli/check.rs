//! `--mode check`: run the manifest's livecheck and report the newest release.
//!
//! The steps run strictly in sequence:
//!
//! 1. Compile the livecheck pattern against its capture order
//! 2. Fetch the livecheck endpoint (one GET, spinner on stderr)
//! 3. Extract releases from the body in document order
//! 4. Pick the newest release and compare it with the manifest version
//!
//! The pattern is compiled before any request is made, so a broken pattern
//! never costs an API call.
//!
//! # Exit Status
//!
//! - `0`: a release was found, whether or not it is newer
//! - `1`: the manifest has no `[livecheck]` section
//! - `2`: bad pattern, network or HTTP failure, or nothing matched

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::cli::output::{self, CheckReport, OutputOptions};
use crate::core::CaskwatchError;
use crate::fetch::ReleaseFetcher;
use crate::manifest::ReleaseManifest;
use crate::utils::Spinner;
use crate::version::{UpdateStatus, newest_release};

/// Run the livecheck for `manifest` and build a report.
///
/// # Errors
///
/// - [`CaskwatchError::MissingLivecheck`] without a `[livecheck]` section
/// - [`CaskwatchError::PatternCompileError`] if the pattern is unusable
/// - [`CaskwatchError::NetworkError`] / [`CaskwatchError::HttpStatusError`]
///   from the fetch
/// - [`CaskwatchError::NoReleasesFound`] if the pattern matched nothing
pub async fn check(
    manifest: &ReleaseManifest,
    fetcher: &ReleaseFetcher,
    show_progress: bool,
) -> Result<CheckReport> {
    let livecheck =
        manifest.livecheck.as_ref().ok_or_else(|| CaskwatchError::MissingLivecheck {
            name: manifest.name.clone(),
        })?;

    let matcher = livecheck.compile()?;

    let spinner = Spinner::new(show_progress);
    spinner.set_message(format!("Fetching {}", livecheck.url));
    let body = fetcher.fetch_text(&livecheck.url).await;
    spinner.finish_and_clear();
    let body = body?;

    let releases: Vec<_> = matcher.releases(&body).collect();
    info!("Found {} release(s) at {}", releases.len(), livecheck.url);

    let newest = newest_release(&releases).cloned().ok_or_else(|| {
        CaskwatchError::NoReleasesFound {
            url: livecheck.url.clone(),
        }
    })?;

    let status = UpdateStatus::evaluate(&manifest.version, &newest.tag);
    debug!("{}: {} ==> {} ({})", manifest.name, manifest.version, newest.tag, status);

    Ok(CheckReport {
        name: manifest.name.clone(),
        current_version: manifest.version.clone(),
        newest,
        status,
        livecheck_url: livecheck.url.clone(),
        releases,
        checked_at: Utc::now(),
    })
}

/// Run the livecheck and print its report.
///
/// # Errors
///
/// See [`check`].
pub async fn run(
    manifest: &ReleaseManifest,
    fetcher: &ReleaseFetcher,
    options: &OutputOptions,
) -> Result<()> {
    let report = check(manifest, fetcher, options.show_progress()).await?;
    output::print_check(&report, options)
}
