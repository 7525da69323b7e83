//! Choosing the newest release and comparing it with a manifest's version.
//!
//! A livecheck run yields releases in document order. Release APIs usually
//! list newest first, but HTML pages and paginated feeds don't, so the
//! newest release is the one with the highest semantic version tag. When no
//! tag parses as a semantic version the first release in document order is
//! taken as the newest.

pub mod comparison;

pub use comparison::VersionComparator;

use serde::Serialize;
use std::fmt;

use crate::constants::LATEST_VERSION;
use crate::manifest::ExtractedRelease;

/// Pick the newest of `releases`. Returns `None` only for an empty slice.
///
/// # Examples
///
/// ```rust
/// use caskwatch::manifest::ExtractedRelease;
/// use caskwatch::version::newest_release;
///
/// let release = |tag: &str| ExtractedRelease {
///     tag: tag.to_string(),
///     asset_name: None,
///     asset_url: None,
/// };
/// let releases = vec![release("v1.9.0"), release("v2.0.0"), release("v1.10.0")];
///
/// assert_eq!(newest_release(&releases).unwrap().tag, "v2.0.0");
/// ```
#[must_use]
pub fn newest_release(releases: &[ExtractedRelease]) -> Option<&ExtractedRelease> {
    let newest_tag = VersionComparator::get_latest(releases.iter().map(|r| r.tag.as_str()));

    match newest_tag {
        Some(tag) => releases.iter().find(|r| r.tag == tag),
        None => releases.first(),
    }
}

/// How a manifest's version relates to the newest published release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    /// A newer release is published.
    Outdated,
    /// The manifest already pins the newest release.
    UpToDate,
    /// The manifest tracks `latest`, or the versions can't be compared.
    Unknown,
}

impl UpdateStatus {
    /// Compare the manifest's `current` version with the `newest` tag.
    ///
    /// `latest` is always [`UpdateStatus::Unknown`]: such a manifest follows
    /// whatever is published. Versions that are not semantic versions are
    /// equal only if their prefix-stripped text is.
    #[must_use]
    pub fn evaluate(current: &str, newest: &str) -> Self {
        let current = current.trim();
        if current == LATEST_VERSION {
            return Self::Unknown;
        }

        match VersionComparator::is_newer(newest, current) {
            Ok(true) => Self::Outdated,
            Ok(false) => Self::UpToDate,
            Err(_) if normalize(current) == normalize(newest) => Self::UpToDate,
            Err(_) => Self::Unknown,
        }
    }

    /// Whether a newer release is known to exist.
    #[must_use]
    pub const fn is_outdated(self) -> bool {
        matches!(self, Self::Outdated)
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outdated => f.write_str("outdated"),
            Self::UpToDate => f.write_str("up to date"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

fn normalize(tag: &str) -> &str {
    let tag = tag.trim();
    tag.strip_prefix('v').or_else(|| tag.strip_prefix('V')).unwrap_or(tag)
}
