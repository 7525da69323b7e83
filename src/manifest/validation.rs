//! Validation of release manifests.
//!
//! [`validate`] is a pure function: it inspects a [`ReleaseManifest`] and
//! returns every problem it finds as a [`ValidationIssue`], never mutating
//! the manifest and never stopping at the first problem.
//!
//! # Checks
//!
//! | Field | Check | Severity |
//! |-------|-------|----------|
//! | `name`, `version`, `url`, `sha256` | present and non-empty | Error |
//! | `url` | template expands and parses as an http(s) URL | Error |
//! | `homepage`, `livecheck.url` | parse as http(s) URLs | Error |
//! | `sha256` | `no_check` or 64 hex characters | Error |
//! | `version` | `latest` or a semantic version | Warning |
//! | `livecheck.regex` | compiles, has ≥1 capture group | Error |
//! | `livecheck.captures` | one field per group, `tag` exactly once | Error |

use serde::Serialize;
use std::fmt;
use url::Url;

use crate::constants::LATEST_VERSION;
use crate::manifest::ReleaseManifest;
use crate::manifest::checksum::ChecksumPolicy;
use crate::manifest::livecheck::LivecheckConfig;
use crate::pattern::PatternExtractor;
use crate::version::VersionComparator;

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The manifest is unusable; `validate` mode exits non-zero.
    Error,
    /// Suspicious but usable.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// Which check produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field is absent or empty
    MissingField,
    /// A URL does not parse or uses an unsupported scheme
    InvalidUrl,
    /// The checksum is neither `no_check` nor a SHA-256 digest
    InvalidChecksum,
    /// The livecheck pattern does not compile or does not fit its captures
    PatternCompile,
    /// The version is not `latest` or a semantic version
    InvalidVersion,
    /// The URL template has unknown placeholders or unbalanced braces
    Template,
}

/// A single problem found in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Manifest field the issue is about, e.g. `url` or `livecheck.regex`
    pub field: String,
    /// Error or warning
    pub severity: Severity,
    /// Category of the check that failed
    pub kind: IssueKind,
    /// Human-readable description
    pub message: String,
}

impl ValidationIssue {
    /// Create an Error-severity issue.
    pub fn error(field: impl Into<String>, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            severity: Severity::Error,
            kind,
            message: message.into(),
        }
    }

    /// Create a Warning-severity issue.
    pub fn warning(field: impl Into<String>, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            severity: Severity::Warning,
            kind,
            message: message.into(),
        }
    }

    /// Whether this issue has Error severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Number of Error-severity issues in `issues`.
#[must_use]
pub fn error_count(issues: &[ValidationIssue]) -> usize {
    issues.iter().filter(|issue| issue.is_error()).count()
}

/// Validate `manifest`, returning every issue found.
///
/// An empty result means the manifest is valid with no warnings.
///
/// # Examples
///
/// ```rust
/// use caskwatch::manifest::{ChecksumPolicy, ReleaseManifest, validate};
///
/// let manifest = ReleaseManifest {
///     name: "ExampleApp".to_string(),
///     version: "latest".to_string(),
///     download_url_template: "https://example.com/{version}/App.dmg".to_string(),
///     checksum_policy: Some(ChecksumPolicy::NoCheck),
///     ..Default::default()
/// };
/// assert!(validate(&manifest).is_empty());
/// ```
#[must_use]
pub fn validate(manifest: &ReleaseManifest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_required(manifest, &mut issues);
    check_version(manifest, &mut issues);
    check_download_url(manifest, &mut issues);
    if let Some(homepage) = &manifest.homepage {
        check_url("homepage", homepage, &mut issues);
    }
    check_checksum(manifest, &mut issues);
    if let Some(livecheck) = &manifest.livecheck {
        check_livecheck(livecheck, &mut issues);
    }

    issues
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_required(manifest: &ReleaseManifest, issues: &mut Vec<ValidationIssue>) {
    let checksum_blank = manifest.checksum_policy.as_ref().is_none_or(|policy| match policy {
        ChecksumPolicy::NoCheck => false,
        ChecksumPolicy::Sha256(digest) => is_blank(digest),
    });

    let required = [
        ("name", is_blank(&manifest.name)),
        ("version", is_blank(&manifest.version)),
        ("url", is_blank(&manifest.download_url_template)),
        ("sha256", checksum_blank),
    ];

    for (field, missing) in required {
        if missing {
            issues.push(ValidationIssue::error(
                field,
                IssueKind::MissingField,
                format!("missing required field '{field}'"),
            ));
        }
    }
}

fn check_version(manifest: &ReleaseManifest, issues: &mut Vec<ValidationIssue>) {
    let version = manifest.version.trim();
    if version.is_empty() || version == LATEST_VERSION {
        return;
    }

    if VersionComparator::parse_version(version).is_err() {
        issues.push(ValidationIssue::warning(
            "version",
            IssueKind::InvalidVersion,
            format!("'{version}' is neither \"{LATEST_VERSION}\" nor a semantic version"),
        ));
    }
}

fn check_download_url(manifest: &ReleaseManifest, issues: &mut Vec<ValidationIssue>) {
    if is_blank(&manifest.download_url_template) {
        return;
    }

    match manifest.download_url() {
        Ok(expanded) => check_url("url", &expanded, issues),
        Err(e) => issues.push(ValidationIssue::error("url", IssueKind::Template, e.to_string())),
    }
}

/// Check that `value` is an absolute http(s) URL.
fn check_url(field: &str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if is_blank(value) {
        issues.push(ValidationIssue::error(field, IssueKind::InvalidUrl, "URL must not be empty"));
        return;
    }

    let url = match Url::parse(value.trim()) {
        Ok(url) => url,
        Err(e) => {
            issues.push(ValidationIssue::error(
                field,
                IssueKind::InvalidUrl,
                format!("'{value}' is not a valid URL: {e}"),
            ));
            return;
        }
    };

    match url.scheme() {
        "http" | "https" => {}
        scheme => issues.push(ValidationIssue::error(
            field,
            IssueKind::InvalidUrl,
            format!("unsupported URL scheme '{scheme}' (expected http or https)"),
        )),
    }
}

fn check_checksum(manifest: &ReleaseManifest, issues: &mut Vec<ValidationIssue>) {
    let Some(policy) = &manifest.checksum_policy else {
        return;
    };
    let Some(digest) = policy.digest() else {
        return;
    };
    if is_blank(digest) {
        // Already reported as missing
        return;
    }

    if !policy.is_well_formed() {
        issues.push(ValidationIssue::error(
            "sha256",
            IssueKind::InvalidChecksum,
            format!(
                "expected \"no_check\" or a 64-character hex SHA-256 digest, got {} character(s)",
                digest.len()
            ),
        ));
    }
}

fn check_livecheck(livecheck: &LivecheckConfig, issues: &mut Vec<ValidationIssue>) {
    if is_blank(&livecheck.url) {
        issues.push(ValidationIssue::error(
            "livecheck.url",
            IssueKind::MissingField,
            "missing required field 'livecheck.url'",
        ));
    } else {
        check_url("livecheck.url", &livecheck.url, issues);
    }

    if livecheck.regex.is_empty() {
        issues.push(ValidationIssue::error(
            "livecheck.regex",
            IssueKind::MissingField,
            "missing required field 'livecheck.regex'",
        ));
        return;
    }

    let extractor = match PatternExtractor::new(&livecheck.regex, livecheck.dot_matches_newline) {
        Ok(extractor) => extractor,
        Err(e) => {
            issues.push(ValidationIssue::error(
                "livecheck.regex",
                IssueKind::PatternCompile,
                e.to_string(),
            ));
            return;
        }
    };

    let group_count = extractor.group_count();
    if let Err(e) = livecheck.check_capture_order(group_count) {
        let field = if group_count == 0 { "livecheck.regex" } else { "livecheck.captures" };
        issues.push(ValidationIssue::error(field, IssueKind::PatternCompile, e.to_string()));
    }
}
