//! Checksum policy declared by a manifest's `sha256` field.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{NO_CHECK, SHA256_HEX_LEN};

/// How a downloaded artifact is verified.
///
/// Written in the manifest as either the keyword `"no_check"` or a hex digest:
///
/// ```toml
/// sha256 = "no_check"
/// # or
/// sha256 = "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
/// ```
///
/// Any string other than `no_check` deserializes to [`ChecksumPolicy::Sha256`]
/// unchanged; whether it is a well-formed digest is a validation concern
/// (see [`ChecksumPolicy::is_well_formed`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChecksumPolicy {
    /// Skip verification. Required for `version = "latest"` artifacts whose
    /// bytes change with every release.
    NoCheck,
    /// Verify against this SHA-256 digest.
    Sha256(String),
}

impl ChecksumPolicy {
    /// Whether the policy is `no_check` or a 64-character hex digest.
    ///
    /// Hex digits are accepted in either case.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::NoCheck => true,
            Self::Sha256(digest) => {
                digest.len() == SHA256_HEX_LEN && digest.chars().all(|c| c.is_ascii_hexdigit())
            }
        }
    }

    /// The raw digest, if one is pinned.
    #[must_use]
    pub fn digest(&self) -> Option<&str> {
        match self {
            Self::NoCheck => None,
            Self::Sha256(digest) => Some(digest),
        }
    }
}

impl From<String> for ChecksumPolicy {
    fn from(value: String) -> Self {
        if value == NO_CHECK {
            Self::NoCheck
        } else {
            Self::Sha256(value)
        }
    }
}

impl From<ChecksumPolicy> for String {
    fn from(policy: ChecksumPolicy) -> Self {
        match policy {
            ChecksumPolicy::NoCheck => NO_CHECK.to_string(),
            ChecksumPolicy::Sha256(digest) => digest,
        }
    }
}

impl fmt::Display for ChecksumPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCheck => f.write_str(NO_CHECK),
            Self::Sha256(digest) => f.write_str(digest),
        }
    }
}
