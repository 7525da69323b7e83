//! Error handling for caskwatch
//!
//! This module provides the error taxonomy and user-friendly error reporting for
//! caskwatch. The error system follows two principles:
//! 1. **Strongly-typed errors** so callers and tests can match on failure modes
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`CaskwatchError`] - Enumerated error types for every failure the tool reports
//! - [`ErrorContext`] - Wrapper that adds details and a suggestion for display
//!
//! # Exit Codes
//!
//! Every [`CaskwatchError`] maps onto one of the process exit codes through
//! [`CaskwatchError::exit_code`]:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | The manifest failed validation |
//! | 2 | Network, HTTP, pattern or manifest parse failure |
//!
//! # Examples
//!
//! ```rust,no_run
//! use caskwatch::core::{CaskwatchError, user_friendly_error};
//!
//! let error = CaskwatchError::HttpStatusError {
//!     url: "https://api.github.com/repos/o/r/releases/latest".to_string(),
//!     status: 404,
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! assert_eq!(ctx.exit_code(), 2);
//! ctx.display(); // Shows colored error with suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::constants::{EXIT_FAILURE, EXIT_VALIDATION_FAILED};

/// The main error type for caskwatch operations.
///
/// Variants are grouped by the stage that produces them:
///
/// ## Network
/// - [`NetworkError`] - connection failure, DNS failure or timeout
/// - [`HttpStatusError`] - the endpoint answered with a non-2xx status
///
/// ## Parsing
/// - [`ManifestNotFound`] - the manifest path does not exist
/// - [`ManifestFormatError`] - the manifest is not valid TOML or has the wrong shape
/// - [`PatternCompileError`] - the livecheck regex is malformed or its group count is wrong
/// - [`ConfigError`] - the global configuration file could not be read
///
/// ## Validation
/// - [`ValidationError`] - one or more Error-severity issues were found
/// - [`MissingLivecheck`] - `check` mode was requested for a manifest without livecheck
///
/// ## Livecheck
/// - [`NoReleasesFound`] - the pattern matched nothing in the fetched body
///
/// [`NetworkError`]: CaskwatchError::NetworkError
/// [`HttpStatusError`]: CaskwatchError::HttpStatusError
/// [`ManifestNotFound`]: CaskwatchError::ManifestNotFound
/// [`ManifestFormatError`]: CaskwatchError::ManifestFormatError
/// [`PatternCompileError`]: CaskwatchError::PatternCompileError
/// [`ConfigError`]: CaskwatchError::ConfigError
/// [`ValidationError`]: CaskwatchError::ValidationError
/// [`MissingLivecheck`]: CaskwatchError::MissingLivecheck
/// [`NoReleasesFound`]: CaskwatchError::NoReleasesFound
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaskwatchError {
    /// Connecting to or reading from the endpoint failed.
    ///
    /// Covers DNS failures, refused connections, TLS errors and timeouts.
    #[error("Network error while fetching {url}: {reason}")]
    NetworkError {
        /// The URL being fetched
        url: String,
        /// Description of the underlying failure
        reason: String,
    },

    /// The endpoint answered with a non-success status code.
    #[error("HTTP {status} returned by {url}")]
    HttpStatusError {
        /// The URL being fetched
        url: String,
        /// The HTTP status code
        status: u16,
    },

    /// The livecheck regex is malformed or does not fit the capture order.
    #[error("Invalid livecheck pattern: {reason}")]
    PatternCompileError {
        /// The offending pattern source
        pattern: String,
        /// Why the pattern was rejected
        reason: String,
    },

    /// The manifest file could not be parsed.
    #[error("Failed to parse manifest {path}: {reason}")]
    ManifestFormatError {
        /// Path of the manifest file
        path: String,
        /// Parser error message
        reason: String,
    },

    /// The manifest file does not exist.
    #[error("Manifest file {path} not found")]
    ManifestNotFound {
        /// Path that was looked up
        path: String,
    },

    /// Validation found Error-severity issues.
    #[error("Manifest validation failed with {errors} error(s)")]
    ValidationError {
        /// Number of Error-severity issues
        errors: usize,
    },

    /// `check` mode needs a `[livecheck]` section.
    #[error("Manifest '{name}' has no [livecheck] section")]
    MissingLivecheck {
        /// Name declared by the manifest
        name: String,
    },

    /// The livecheck pattern matched nothing usable in the response body.
    #[error("No releases matched the livecheck pattern at {url}")]
    NoReleasesFound {
        /// The endpoint that was scanned
        url: String,
    },

    /// The global configuration file is unreadable or malformed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Any other failure.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl CaskwatchError {
    /// Process exit code for this error.
    ///
    /// Validation-class failures exit with 1, everything else with 2.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationError {
                ..
            }
            | Self::MissingLivecheck {
                ..
            } => EXIT_VALIDATION_FAILED,
            _ => EXIT_FAILURE,
        }
    }
}

/// Error wrapper carrying user-facing details and a suggestion.
///
/// # Examples
///
/// ```rust,no_run
/// use caskwatch::core::{CaskwatchError, ErrorContext};
///
/// let context = ErrorContext::new(CaskwatchError::ManifestNotFound {
///     path: "cask.toml".to_string(),
/// })
/// .with_suggestion("Pass the manifest location with --manifest <path>")
/// .with_details("caskwatch reads exactly one manifest per invocation");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CaskwatchError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no details or suggestion.
    #[must_use]
    pub const fn new(error: CaskwatchError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are printed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    ///
    /// Details are printed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Exit code of the wrapped error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.error.exit_code()
    }

    /// Print the error, details and suggestion to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with actionable suggestions.
///
/// The error chain is walked so that a [`CaskwatchError`] wrapped in
/// `anyhow` context is still recognized. Anything else is reported as
/// [`CaskwatchError::Other`] with the full chain as details, and exits with 2.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(caskwatch_error) = cause.downcast_ref::<CaskwatchError>() {
            return create_error_context(caskwatch_error);
        }
    }

    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    let ctx = ErrorContext::new(CaskwatchError::Other {
        message: error.to_string(),
    });
    if chain.is_empty() {
        ctx
    } else {
        ctx.with_details(chain.join(": "))
    }
}

/// Attach details and a suggestion appropriate to each error variant.
pub fn create_error_context(error: &CaskwatchError) -> ErrorContext {
    let ctx = ErrorContext::new(error.clone());
    match error {
        CaskwatchError::NetworkError {
            reason,
            ..
        } => ctx
            .with_suggestion("Check your internet connection or raise the limit with --timeout")
            .with_details(reason.clone()),
        CaskwatchError::HttpStatusError {
            status,
            ..
        } => {
            let suggestion = match status {
                401 | 403 => {
                    "The endpoint rejected the request; set CASKWATCH_GITHUB_TOKEN or pass --token"
                }
                404 => "Verify the livecheck url in the manifest points at an existing release feed",
                429 => "The endpoint is rate limiting requests; retry later or authenticate with --token",
                _ => "Retry later; the endpoint did not return a successful response",
            };
            ctx.with_suggestion(suggestion)
        }
        CaskwatchError::PatternCompileError {
            pattern,
            ..
        } => ctx
            .with_suggestion(
                "Fix the livecheck regex and make `captures` list one field per capture group",
            )
            .with_details(format!("Pattern: {pattern}")),
        CaskwatchError::ManifestFormatError {
            ..
        } => ctx.with_suggestion("Check the manifest syntax; it must be a valid TOML document"),
        CaskwatchError::ManifestNotFound {
            ..
        } => ctx.with_suggestion("Pass the manifest location with --manifest <path>"),
        CaskwatchError::ValidationError {
            ..
        } => ctx.with_suggestion("Fix the issues listed above and run the validation again"),
        CaskwatchError::MissingLivecheck {
            ..
        } => ctx.with_suggestion("Add a [livecheck] section with url, regex and captures"),
        CaskwatchError::NoReleasesFound {
            ..
        } => ctx
            .with_suggestion("Run with --verbose to inspect the response and adjust the regex")
            .with_details("The endpoint responded, but the pattern produced no usable tag"),
        CaskwatchError::ConfigError {
            ..
        } => ctx.with_suggestion(
            "Check ~/.caskwatch/config.toml, or point CASKWATCH_CONFIG_PATH at a valid file",
        ),
        CaskwatchError::Other {
            ..
        } => ctx,
    }
}
