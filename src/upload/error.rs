use camino::Utf8PathBuf;
use std::io;
use url::Url;

/// Failures of a single coverage upload.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The coverage report could not be read.
    #[error("unable to read coverage report '{path}'")]
    FileAccess {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report could not be gzip-compressed.
    #[error("unable to compress coverage report")]
    Compression(#[source] io::Error),

    /// The HTTP exchange with the endpoint could not be completed.
    #[error("unable to submit coverage report to '{endpoint}'")]
    Network {
        endpoint: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with something that is not JSON.
    #[error("failure to submit data, response [{status}]: {body}")]
    Submission { status: u16, body: String },

    /// The service answered with JSON that lacks a required string field.
    #[error("response [{status}] has no '{field}' field{}", service_message(.message))]
    MissingField {
        field: &'static str,
        status: u16,
        message: Option<String>,
    },
}

fn service_message(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(" (service said: {m})")).unwrap_or_default()
}
