//! Semantic version comparison for release tags.
//!
//! Release tags rarely are bare semantic versions: GitHub projects tag
//! `v1.2.3`, `release-1.2.3` or `version-1.2.3`. [`VersionComparator`]
//! strips those prefixes before handing the rest to `semver`.
//!
//! # Examples
//!
//! ```rust
//! use caskwatch::version::comparison::VersionComparator;
//!
//! # fn example() -> anyhow::Result<()> {
//! let tags = ["v1.0.0", "v2.0.0", "nightly", "release-1.5.0"];
//!
//! assert_eq!(VersionComparator::get_latest(tags), Some("v2.0.0"));
//! assert!(VersionComparator::is_newer("v2.0.0", "1.5.0")?);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use semver::Version;

/// Prefixes stripped from tags before parsing, longest first.
const TAG_PREFIXES: &[&str] = &["version-", "release-", "v", "V"];

/// Static helpers for comparing release tags as semantic versions.
///
/// Tags that do not parse are skipped by [`VersionComparator::get_latest`] and
/// reported as errors by [`VersionComparator::is_newer`].
pub struct VersionComparator;

impl VersionComparator {
    /// Whether `candidate` is a strictly higher version than `current`.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not a semantic version.
    pub fn is_newer(candidate: &str, current: &str) -> Result<bool> {
        Ok(Self::parse_version(candidate)? > Self::parse_version(current)?)
    }

    /// The highest semantic version among `tags`.
    ///
    /// Unparseable tags are ignored. When several tags parse to the same
    /// version the first one wins. Returns `None` if no tag parses.
    pub fn get_latest<'a>(tags: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
        let mut latest: Option<(&str, Version)> = None;

        for tag in tags {
            let Ok(version) = Self::parse_version(tag) else {
                continue;
            };
            let replace = match &latest {
                Some((_, best)) => version > *best,
                None => true,
            };
            if replace {
                latest = Some((tag, version));
            }
        }

        latest.map(|(tag, _)| tag)
    }

    /// Parse a tag as a semantic version, stripping common prefixes.
    ///
    /// - `v1.2.3` → `1.2.3`
    /// - `version-1.2.3` → `1.2.3`
    /// - `release-1.2.3` → `1.2.3`
    /// - `1.2.3` → `1.2.3`
    ///
    /// # Errors
    ///
    /// Returns an error if what remains is not a valid semantic version.
    pub fn parse_version(tag: &str) -> Result<Version> {
        let trimmed = tag.trim();
        let clean = TAG_PREFIXES
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
            .unwrap_or(trimmed);

        Version::parse(clean).with_context(|| format!("'{tag}' is not a semantic version"))
    }
}
