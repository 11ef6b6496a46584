//! Submission of coverage reports to the Coveralls job API.
//!
//! A report is treated as opaque bytes. It is gzip-compressed and posted as the
//! single `json_file` part of a multipart form. The service answers with a JSON
//! document whose `url` field locates the stored job; the result document lives
//! at that URL with a `.json` suffix.
//!
//! Every failure is reported through [`UploadError`]. Nothing is retried.

mod compress;
mod error;
mod response;
mod uploader;

pub use compress::compress_payload;
pub use error::UploadError;
pub use response::parse_job_response;
pub use uploader::{COVERALLS_JOBS_URL, Uploader, read_payload};
