//! caskwatch - release-metadata fetcher and cask manifest validator
//!
//! caskwatch reads a release manifest, a cask-like description of one
//! downloadable application, and either validates it or runs its
//! *livecheck*: a single request to an upstream releases endpoint whose body
//! is scanned with a regular expression to find the newest published tag.
//!
//! # Architecture Overview
//!
//! The pipeline is strictly sequential and stateless:
//!
//! ```text
//! manifest.toml ──load──▶ ReleaseManifest ──validate──▶ Vec<ValidationIssue>
//!                              │
//!                              └─livecheck─▶ fetch ─▶ extract ─▶ newest release
//! ```
//!
//! # Core Modules
//!
//! - [`manifest`] - Manifest model, TOML loading, and validation
//! - [`pattern`] - Regex extraction of capture tuples from fetched text
//! - [`fetch`] - HTTP retrieval of livecheck endpoints
//! - [`version`] - Newest-release selection and version comparison
//! - [`cli`] - Command-line interface (`--mode check|validate`)
//!
//! ## Supporting Modules
//! - [`config`] - Global configuration (`~/.caskwatch/config.toml`)
//! - [`core`] - Error taxonomy and user-friendly error reporting
//! - [`constants`] - Timeouts, exit codes, and manifest keywords
//! - [`utils`] - Progress spinner
//!
//! # Manifest Format
//!
//! ```toml
//! name = "MyAmpSwitcher"
//! version = "latest"
//! homepage = "https://github.com/PaoloFrigo/my-amp-switcher"
//! url = "https://github.com/paolofrigo/my-amp-switcher/releases/latest/download/MyAmpSwitcher.dmg"
//! sha256 = "no_check"
//!
//! [livecheck]
//! url = "https://api.github.com/repos/paolofrigo/my-amp-switcher/releases/latest"
//! regex = '"tag_name":\s*"(.*?)".*?"name":\s*"(.*?)".*?"browser_download_url":\s*"(.*?)"'
//! captures = ["tag", "asset_name", "asset_url"]
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Validate a manifest (exit 1 on errors)
//! caskwatch --manifest myampswitcher.toml --mode validate
//!
//! # Find the newest release (exit 2 on network failure)
//! caskwatch --manifest myampswitcher.toml --mode check
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod fetch;
pub mod manifest;
pub mod pattern;
pub mod utils;
pub mod version;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
