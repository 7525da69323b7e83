//! Integration test suite for caskwatch
//!
//! These tests spawn the real binary against manifests written to temporary
//! directories. Check-mode tests point the livecheck at a canned HTTP server
//! on localhost, so the suite never touches the network.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **validate**: `--mode validate` output and exit codes
//! - **check**: `--mode check` against canned release feeds
//! - **errors**: missing/unparseable manifests and bad configuration

mod common;

mod check;
mod errors;
mod validate;
