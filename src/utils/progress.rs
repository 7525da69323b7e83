//! Progress indicators for long-running steps
//!
//! The only step in caskwatch that can take noticeable time is the livecheck
//! fetch, so this module offers a single spinner. It draws on stderr and so
//! never mixes with report output on stdout.
//!
//! # Environment Variables
//!
//! - `CASKWATCH_NO_PROGRESS`: Set to any value to disable all progress indicators
//!
//! # Examples
//!
//! ```rust
//! use caskwatch::utils::progress::Spinner;
//!
//! let spinner = Spinner::new(true);
//! spinner.set_message("Fetching releases...");
//!
//! // Long running operation
//! // fetcher.fetch(url).await?;
//!
//! spinner.finish_and_clear();
//! ```
//!
//! Indicatif hides the spinner by itself when stderr is not a terminal, so
//! pipes and CI logs stay clean without extra configuration.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

use crate::constants::NO_PROGRESS_ENV_VAR;

/// Check if progress indicators are disabled via environment variable
fn is_progress_disabled() -> bool {
    std::env::var_os(NO_PROGRESS_ENV_VAR).is_some()
}

/// Spinner for work of unknown length.
#[derive(Clone)]
pub struct Spinner {
    inner: IndicatifBar,
}

impl Spinner {
    /// Create a spinner, hidden unless `enabled` and not disabled by
    /// `CASKWATCH_NO_PROGRESS`.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        let bar = if !enabled || is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self {
            inner: bar,
        }
    }

    /// Set the text shown next to the spinner.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Stop and remove the spinner from the terminal.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }

    /// Whether the spinner draws anything.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.inner.is_hidden()
    }
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
}
