//! Global constants used throughout the caskwatch codebase.
//!
//! Timeouts, exit codes, header values and manifest keywords that are used
//! across multiple modules live here so magic values stay discoverable.

use std::time::Duration;

/// Default timeout for the livecheck fetch (30 seconds).
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request. GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("caskwatch/", env!("CARGO_PKG_VERSION"));

/// Accept header for livecheck requests.
///
/// Prefers the GitHub REST media type but still accepts HTML release pages.
pub const ACCEPT_HEADER: &str = "application/vnd.github+json, text/html;q=0.9, */*;q=0.8";

/// Exit code when the manifest has Error-severity issues.
pub const EXIT_VALIDATION_FAILED: i32 = 1;

/// Exit code for network, HTTP, pattern and parse failures.
pub const EXIT_FAILURE: i32 = 2;

/// Version sentinel meaning "whatever the download URL currently serves".
pub const LATEST_VERSION: &str = "latest";

/// Checksum keyword that disables artifact verification.
pub const NO_CHECK: &str = "no_check";

/// Number of hex characters in a SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

/// Environment variable holding an API token for the livecheck endpoint.
pub const TOKEN_ENV_VAR: &str = "CASKWATCH_GITHUB_TOKEN";

/// Environment variable overriding the global config file location.
pub const CONFIG_PATH_ENV_VAR: &str = "CASKWATCH_CONFIG_PATH";

/// Environment variable disabling progress spinners.
pub const NO_PROGRESS_ENV_VAR: &str = "CASKWATCH_NO_PROGRESS";
