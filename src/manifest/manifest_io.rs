//! I/O operations for manifest files.
//!
//! Loading is the only I/O a manifest needs: it is read once at start-up and
//! never written back.

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::core::CaskwatchError;
use crate::manifest::ReleaseManifest;

impl ReleaseManifest {
    /// Load and parse a manifest from a TOML file.
    ///
    /// The manifest is *not* validated here; call
    /// [`ReleaseManifest::validate`] for that. Only the document structure is
    /// checked, so a file with missing fields still loads.
    ///
    /// # Errors
    ///
    /// - [`CaskwatchError::ManifestNotFound`] if `path` does not exist
    /// - [`CaskwatchError::ManifestFormatError`] if the file cannot be read,
    ///   is not valid TOML, or contains unknown keys
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use caskwatch::manifest::ReleaseManifest;
    /// use std::path::Path;
    ///
    /// let manifest = ReleaseManifest::load(Path::new("myampswitcher.toml"))?;
    /// println!("{} {}", manifest.name, manifest.version);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CaskwatchError::ManifestNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        debug!("Loading manifest from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| CaskwatchError::ManifestFormatError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::from_toml_str(&content, &path.display().to_string())?)
    }

    /// Parse a manifest from TOML text. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`CaskwatchError::ManifestFormatError`] on invalid TOML or
    /// unknown keys.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, CaskwatchError> {
        toml::from_str(content).map_err(|e| CaskwatchError::ManifestFormatError {
            path: origin.to_string(),
            reason: e.message().to_string(),
        })
    }
}
