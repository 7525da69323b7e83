//! Release manifest parsing and validation.
//!
//! A release manifest describes one downloadable application: where to get
//! it, how to verify it, and how to discover new releases.
//!
//! # Basic Structure
//!
//! ```toml
//! name = "MyAmpSwitcher"
//! version = "latest"
//! description = "Control any device through MIDI messages"
//! homepage = "https://github.com/PaoloFrigo/my-amp-switcher"
//! url = "https://github.com/paolofrigo/my-amp-switcher/releases/latest/download/MyAmpSwitcher.dmg"
//! sha256 = "no_check"
//! app = "MyAmpSwitcher.app"
//!
//! [livecheck]
//! url = "https://api.github.com/repos/paolofrigo/my-amp-switcher/releases/latest"
//! regex = '"tag_name":\s*"(.*?)".*?"name":\s*"(.*?)".*?"browser_download_url":\s*"(.*?)"'
//! captures = ["tag", "asset_name", "asset_url"]
//! ```
//!
//! # Fields
//!
//! - `name` (required): display name of the application
//! - `version` (required): `"latest"` or a version such as `"1.4.2"`
//! - `url` (required): download URL, may use `{version}` and `{name}`
//! - `sha256` (required): `"no_check"` or the artifact's SHA-256 digest
//! - `homepage`, `description`, `app`, `caveats` (optional)
//! - `[livecheck]` (optional): see [`livecheck`]
//!
//! Parsing is deliberately lenient about missing values: absent strings
//! deserialize as empty and are reported by [`validate`] with the field
//! name, rather than failing the parse. Unknown keys are a parse error.
//!
//! # Lifecycle
//!
//! A manifest is loaded once per invocation and never modified.

pub mod checksum;
pub mod livecheck;
mod manifest_io;
pub mod template;
pub mod validation;

#[cfg(test)]
mod validation_tests;

use serde::{Deserialize, Serialize};

use crate::constants::LATEST_VERSION;

pub use checksum::ChecksumPolicy;
pub use livecheck::{CaptureField, ExtractedRelease, LivecheckConfig, ReleaseMatcher};
pub use template::{TemplateError, TemplateVars};
pub use validation::{IssueKind, Severity, ValidationIssue, error_count, validate};

/// In-memory form of a release manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseManifest {
    /// Display name of the application.
    #[serde(default)]
    pub name: String,

    /// `"latest"` or a concrete version.
    #[serde(default)]
    pub version: String,

    /// One-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Project homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// Download URL template, written as `url` in the file.
    #[serde(default, rename = "url")]
    pub download_url_template: String,

    /// Artifact checksum policy, written as `sha256` in the file.
    #[serde(default, rename = "sha256", skip_serializing_if = "Option::is_none")]
    pub checksum_policy: Option<ChecksumPolicy>,

    /// Application bundle the artifact contains, e.g. `MyAmpSwitcher.app`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,

    /// Post-install notes shown to the user, e.g. how to clear quarantine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caveats: Option<String>,

    /// Release discovery settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub livecheck: Option<LivecheckConfig>,
}

impl ReleaseManifest {
    /// Whether the manifest tracks the moving `latest` release.
    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.version.trim() == LATEST_VERSION
    }

    /// Expand `{version}` and `{name}` in the download URL template.
    ///
    /// The result is not checked to be a URL; [`validate`] does that.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for unknown placeholders or unbalanced
    /// braces.
    pub fn download_url(&self) -> Result<String, TemplateError> {
        template::expand(
            &self.download_url_template,
            TemplateVars {
                version: self.version.trim(),
                name: self.name.trim(),
            },
        )
    }

    /// Run every validation check. See [`validation`].
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate(self)
    }
}
