//! Command-line interface for coveralls-upload
//!
//! The binary takes one coverage report path, submits it through
//! [`crate::upload::Uploader`], and prints the URL of the stored result document.
//!
//! All terminal interaction goes through the [`Host`] trait so the command can be
//! driven in-process by tests: normal output carries only the result URL, failures
//! are described on the error stream and end with a non-zero exit code.

mod host;
mod logging;
mod run;

pub use host::Host;
pub use logging::LogLevel;
pub use run::run;
