//! Terminal user-interface helpers
//!
//! # Modules
//!
//! - [`progress`] - Spinner shown while the livecheck endpoint is fetched

pub mod progress;

pub use progress::Spinner;
