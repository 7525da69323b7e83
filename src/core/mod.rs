//! Core types shared across caskwatch.
//!
//! This module holds the error taxonomy every other module reports through.
//! See [`error`] for the variants and their exit codes.

pub mod error;

pub use error::{CaskwatchError, ErrorContext, create_error_context, user_friendly_error};
