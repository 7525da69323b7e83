//! Configuration management for caskwatch
//!
//! caskwatch has two layers of configuration:
//!
//! 1. **Command-line flags and environment variables** (see [`crate::cli`])
//! 2. **Global configuration** (`~/.caskwatch/config.toml`) for settings that
//!    apply to every manifest, most importantly the API token
//!
//! Manifests themselves are not configuration; see [`crate::manifest`].
//!
//! # Security
//!
//! Tokens belong in the global file or in `CASKWATCH_GITHUB_TOKEN`, never in
//! a manifest that gets committed. They are not logged.

pub mod global;

pub use global::GlobalConfig;
