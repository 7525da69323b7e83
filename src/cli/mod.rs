//! Command-line interface for caskwatch.
//!
//! caskwatch has no subcommands: one manifest is given with `--manifest` and
//! `--mode` picks what to do with it.
//!
//! # Modes
//!
//! - `validate` - check the manifest locally and list every issue ([`validate`])
//! - `check` - run the livecheck and report the newest release ([`check`])
//!
//! # Global Options
//!
//! - `--format <text|json>` - report format
//! - `--verbose` / `--quiet` - more or less output
//! - `--no-progress` - never draw the fetch spinner
//! - `--timeout <SECS>` - request timeout
//! - `--token <TOKEN>` - API token (or `CASKWATCH_GITHUB_TOKEN`)
//! - `--config <PATH>` - global config file (or `CASKWATCH_CONFIG_PATH`)
//! - `--strict` - treat validation warnings as errors
//!
//! # Examples
//!
//! ```bash
//! # Validate a manifest
//! caskwatch --manifest myampswitcher.toml --mode validate
//!
//! # Look for a newer release, authenticated
//! CASKWATCH_GITHUB_TOKEN=ghp_... caskwatch --manifest myampswitcher.toml --mode check
//!
//! # Machine-readable output
//! caskwatch -m myampswitcher.toml --mode check --format json
//! ```

pub mod check;
pub mod output;
pub mod validate;


use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::config::GlobalConfig;
use crate::constants::TOKEN_ENV_VAR;
use crate::fetch::ReleaseFetcher;
use crate::manifest::ReleaseManifest;

pub use output::{OutputFormat, OutputOptions};

/// What to do with the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Run the livecheck and report the newest release.
    Check,
    /// Validate the manifest without touching the network.
    Validate,
}

/// Main CLI structure for caskwatch.
#[derive(Parser, Debug)]
#[command(
    name = "caskwatch",
    about = "Validate cask-style release manifests and check for new releases",
    version,
    long_about = "caskwatch reads a release manifest, validates it, and runs its livecheck \
                  against the upstream releases endpoint to find the newest published tag."
)]
pub struct Cli {
    /// Path to the release manifest (TOML)
    #[arg(short, long, value_name = "PATH")]
    pub manifest: PathBuf,

    /// What to do with the manifest
    #[arg(long, value_enum, default_value_t = Mode::Validate)]
    pub mode: Mode,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output (debug logging and extra report detail)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the fetch spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// API token sent as a bearer token to the livecheck endpoint
    #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Path to the global config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat validation warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Default log filter for the chosen verbosity. `RUST_LOG` overrides it.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            "caskwatch=debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Output settings derived from the flags.
    #[must_use]
    pub const fn output_options(&self) -> OutputOptions {
        OutputOptions {
            format: self.format,
            verbose: self.verbose,
            quiet: self.quiet,
            strict: self.strict,
            progress: !self.no_progress,
        }
    }

    /// Build the fetcher: defaults, then the global config file, then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the global config file exists but is invalid.
    pub async fn build_fetcher(&self) -> Result<ReleaseFetcher> {
        let config = GlobalConfig::load_with_optional(self.config.clone()).await?;
        let mut fetcher = config.apply_to(ReleaseFetcher::new());

        if let Some(secs) = self.timeout {
            fetcher = fetcher.with_timeout(Duration::from_secs(secs));
        }
        if self.token.is_some() {
            fetcher = fetcher.with_token(self.token.clone());
        }

        Ok(fetcher)
    }

    /// Load the manifest and run the selected mode.
    ///
    /// # Errors
    ///
    /// Propagates every failure as an [`anyhow::Error`] wrapping a
    /// [`crate::core::CaskwatchError`], so `main` can choose the exit code.
    pub async fn execute(self) -> Result<()> {
        let manifest = ReleaseManifest::load(&self.manifest)?;
        let options = self.output_options();
        debug!("Running {:?} on {}", self.mode, self.manifest.display());

        match self.mode {
            Mode::Validate => validate::run(&self.manifest, &manifest, &options),
            Mode::Check => {
                let fetcher = self.build_fetcher().await?;
                check::run(&manifest, &fetcher, &options).await
            }
        }
    }
}
