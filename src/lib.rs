//! Upload coverage reports to Coveralls.
//!
//! `coveralls-upload` reads a coverage report, gzip-compresses it, submits it to the
//! Coveralls job API as a multipart upload, and prints the URL of the stored result
//! document:
//!
//! ```bash
//! coveralls-upload target/coverage.json
//! # https://coveralls.io/jobs/123456.json
//! ```
//!
//! The [`upload`] module holds the submission logic and can be used on its own;
//! [`commands`] wraps it in the command-line surface.

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod upload;

pub use crate::commands::{Host, run};
