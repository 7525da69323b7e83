//! Test utilities for caskwatch
//!
//! This module provides helpers shared by unit tests and the integration
//! suite: sample manifests, a canned local HTTP server standing in for a
//! releases API, and one-time logging setup.
//!
//! # Example
//!
//! ```rust,no_run
//! use caskwatch::test_utils::{CannedServer, ManifestFixture, RELEASES_BODY};
//!
//! let server = CannedServer::start(200, RELEASES_BODY);
//! let dir = tempfile::tempdir().unwrap();
//! let manifest = ManifestFixture::my_amp_switcher("1.9.0", &server.url("/releases"))
//!     .write_to(dir.path())
//!     .unwrap();
//! ```

pub mod fixtures;
pub mod http;

pub use fixtures::{ManifestFixture, RELEASES_BODY, RELEASES_PATTERN};
pub use http::CannedServer;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=caskwatch=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
