//! Livecheck configuration and release extraction.
//!
//! The `[livecheck]` section of a manifest names an endpoint to poll and a
//! regular expression to scan its body with. `captures` assigns a meaning to
//! each capture group, in group order:
//!
//! ```toml
//! [livecheck]
//! url = "https://api.github.com/repos/paolofrigo/my-amp-switcher/releases/latest"
//! regex = '"tag_name":\s*"(.*?)".*?"name":\s*"(.*?)".*?"browser_download_url":\s*"(.*?)"'
//! captures = ["tag", "asset_name", "asset_url"]
//! ```
//!
//! [`LivecheckConfig::compile`] turns the section into a [`ReleaseMatcher`],
//! which maps every capture tuple onto an [`ExtractedRelease`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};
use url::Url;

use crate::core::CaskwatchError;
use crate::pattern::{CaptureTuple, PatternExtractor};

/// Meaning of one capture group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureField {
    /// The release tag, e.g. `v1.2.0`
    Tag,
    /// Display name of the release asset
    AssetName,
    /// Download URL of the release asset
    AssetUrl,
    /// A group the pattern needs but whose value is discarded
    Ignore,
}

impl CaptureField {
    /// The name used for this field in manifests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::AssetName => "asset_name",
            Self::AssetUrl => "asset_url",
            Self::Ignore => "ignore",
        }
    }
}

fn default_captures() -> Vec<CaptureField> {
    vec![CaptureField::Tag]
}

const fn default_dot_matches_newline() -> bool {
    true
}

/// The `[livecheck]` section of a manifest.
///
/// Fields deserialize leniently; [`crate::manifest::validate`] reports
/// missing or malformed values instead of the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LivecheckConfig {
    /// Endpoint to fetch.
    #[serde(default)]
    pub url: String,

    /// Pattern applied to the response body.
    #[serde(default)]
    pub regex: String,

    /// Meaning of each capture group, in group order. Defaults to `["tag"]`.
    #[serde(default = "default_captures")]
    pub captures: Vec<CaptureField>,

    /// Whether `.` matches newlines. Defaults to `true`.
    #[serde(default = "default_dot_matches_newline")]
    pub dot_matches_newline: bool,
}

impl LivecheckConfig {
    /// Create a config with the default capture order (`["tag"]`).
    pub fn new(url: impl Into<String>, regex: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            regex: regex.into(),
            captures: default_captures(),
            dot_matches_newline: default_dot_matches_newline(),
        }
    }

    /// Replace the capture order.
    #[must_use]
    pub fn with_captures(mut self, captures: Vec<CaptureField>) -> Self {
        self.captures = captures;
        self
    }

    /// Compile the pattern and check it against the capture order.
    ///
    /// # Errors
    ///
    /// Returns [`CaskwatchError::PatternCompileError`] if the regex is
    /// invalid or [`LivecheckConfig::check_capture_order`] rejects it.
    pub fn compile(&self) -> Result<ReleaseMatcher, CaskwatchError> {
        let extractor = PatternExtractor::new(&self.regex, self.dot_matches_newline)?;
        self.check_capture_order(extractor.group_count())?;
        debug!(
            "Compiled livecheck pattern with {} capture group(s): {:?}",
            extractor.group_count(),
            self.captures
        );

        Ok(ReleaseMatcher {
            extractor,
            captures: self.captures.clone(),
        })
    }

    /// Check `captures` against a pattern with `group_count` capture groups.
    ///
    /// The pattern needs at least one group, `captures` must list exactly one
    /// field per group, name `tag` exactly once, and not repeat any field
    /// other than `ignore`.
    ///
    /// # Errors
    ///
    /// Returns [`CaskwatchError::PatternCompileError`] describing the first
    /// rule that fails.
    pub fn check_capture_order(&self, group_count: usize) -> Result<(), CaskwatchError> {
        let fail = |reason: String| CaskwatchError::PatternCompileError {
            pattern: self.regex.clone(),
            reason,
        };

        if group_count == 0 {
            return Err(fail("pattern has no capture groups".to_string()));
        }

        if self.captures.len() != group_count {
            return Err(fail(format!(
                "pattern has {group_count} capture group(s) but captures lists {} field(s)",
                self.captures.len()
            )));
        }

        let mut seen = HashSet::new();
        for field in self.captures.iter().filter(|f| **f != CaptureField::Ignore) {
            if !seen.insert(*field) {
                return Err(fail(format!("captures lists '{}' more than once", field.as_str())));
            }
        }

        if !seen.contains(&CaptureField::Tag) {
            return Err(fail("captures must include 'tag'".to_string()));
        }

        Ok(())
    }
}

/// One release found by a livecheck run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRelease {
    /// Release tag
    pub tag: String,
    /// Asset name, when captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    /// Asset download URL, when captured and well-formed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<Url>,
}

/// A compiled livecheck: pattern plus capture order.
#[derive(Debug, Clone)]
pub struct ReleaseMatcher {
    extractor: PatternExtractor,
    captures: Vec<CaptureField>,
}

impl ReleaseMatcher {
    /// Lazily scan `text` for releases, in document order.
    ///
    /// Matches whose tag capture is empty are skipped. An asset URL that does
    /// not parse is dropped from its release rather than failing the scan.
    pub fn releases<'a>(&'a self, text: &'a str) -> impl Iterator<Item = ExtractedRelease> + 'a {
        self.extractor.extract(text).filter_map(|tuple| self.to_release(tuple))
    }

    fn to_release(&self, tuple: CaptureTuple) -> Option<ExtractedRelease> {
        let mut tag = None;
        let mut asset_name = None;
        let mut asset_url = None;

        for (field, value) in self.captures.iter().zip(tuple) {
            match field {
                CaptureField::Tag => tag = Some(value),
                CaptureField::AssetName => asset_name = Some(value),
                CaptureField::AssetUrl => match Url::parse(&value) {
                    Ok(url) => asset_url = Some(url),
                    Err(e) => debug!("Ignoring malformed asset URL '{}': {}", value, e),
                },
                CaptureField::Ignore => {}
            }
        }

        let tag = tag.filter(|t| !t.trim().is_empty());
        if tag.is_none() {
            trace!("Skipping match with empty tag");
        }

        Some(ExtractedRelease {
            tag: tag?,
            asset_name: asset_name.filter(|n| !n.is_empty()),
            asset_url,
        })
    }
}
