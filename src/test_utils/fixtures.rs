//! Test fixtures for creating sample manifests and release feeds

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A GitHub `/releases` response listing three releases, newest last.
///
/// Each release carries one `tag_name`, `name` and `browser_download_url`, so
/// the standard livecheck pattern yields exactly three tuples.
pub const RELEASES_BODY: &str = r#"[
  {
    "tag_name": "v1.9.0",
    "name": "MyAmpSwitcher.dmg",
    "browser_download_url": "https://github.com/paolofrigo/my-amp-switcher/releases/download/v1.9.0/MyAmpSwitcher.dmg"
  },
  {
    "tag_name": "v2.0.0",
    "name": "MyAmpSwitcher-universal.dmg",
    "browser_download_url": "https://github.com/paolofrigo/my-amp-switcher/releases/download/v2.0.0/MyAmpSwitcher-universal.dmg"
  },
  {
    "tag_name": "v1.10.0",
    "name": "MyAmpSwitcher.dmg",
    "browser_download_url": "https://github.com/paolofrigo/my-amp-switcher/releases/download/v1.10.0/MyAmpSwitcher.dmg"
  }
]"#;

/// The livecheck pattern GitHub release feeds are scanned with.
pub const RELEASES_PATTERN: &str =
    r#""tag_name":\s*"(.*?)".*?"name":\s*"(.*?)".*?"browser_download_url":\s*"(.*?)""#;

/// Test fixture for creating sample manifest files
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    /// The minimal valid manifest: `latest`, templated URL, `no_check`.
    pub fn example_app() -> Self {
        Self {
            name: "example_app".to_string(),
            content: r#"
name = "ExampleApp"
version = "latest"
url = "https://example.com/{version}/App.dmg"
sha256 = "no_check"
"#
            .trim()
            .to_string(),
        }
    }

    /// A complete manifest pinned to `version` whose livecheck polls
    /// `livecheck_url` with [`RELEASES_PATTERN`].
    pub fn my_amp_switcher(version: &str, livecheck_url: &str) -> Self {
        Self {
            name: "my_amp_switcher".to_string(),
            content: format!(
                r#"
name = "MyAmpSwitcher"
version = "{version}"
description = "Control any device through MIDI messages"
homepage = "https://github.com/PaoloFrigo/my-amp-switcher"
url = "https://github.com/paolofrigo/my-amp-switcher/releases/download/v{{version}}/MyAmpSwitcher.dmg"
sha256 = "no_check"
app = "MyAmpSwitcher.app"

[livecheck]
url = "{livecheck_url}"
regex = '{RELEASES_PATTERN}'
captures = ["tag", "asset_name", "asset_url"]
"#
            )
            .trim()
            .to_string(),
        }
    }

    /// Manifest with missing required fields
    pub fn missing_fields() -> Self {
        Self {
            name: "missing_fields".to_string(),
            content: r#"
name = "ExampleApp"
url = "https://example.com/App.dmg"
"#
            .trim()
            .to_string(),
        }
    }

    /// Manifest whose livecheck pattern has no capture groups
    pub fn zero_groups(livecheck_url: &str) -> Self {
        Self {
            name: "zero_groups".to_string(),
            content: format!(
                r#"
name = "ExampleApp"
version = "1.0.0"
url = "https://example.com/{{version}}/App.dmg"
sha256 = "no_check"

[livecheck]
url = "{livecheck_url}"
regex = '"tag_name":\s*"v\d+'
"#
            )
            .trim()
            .to_string(),
        }
    }

    /// Manifest that only warns: a version that isn't a semantic version
    pub fn warnings_only() -> Self {
        Self {
            name: "warnings_only".to_string(),
            content: r#"
name = "ExampleApp"
version = "nightly-2024-06-01"
url = "https://example.com/App.dmg"
sha256 = "no_check"
"#
            .trim()
            .to_string(),
        }
    }

    /// Manifest with invalid syntax
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: r#"
name = "ExampleApp
[livecheck
"#
            .trim()
            .to_string(),
        }
    }

    /// Write to `<dir>/<name>.toml` and return the path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join(format!("{}.toml", self.name));
        fs::write(&manifest_path, &self.content)
            .with_context(|| format!("Failed to write {}", manifest_path.display()))?;
        Ok(manifest_path)
    }
}
