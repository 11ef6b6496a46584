use super::{UploadError, compress_payload, parse_job_response};
use camino::Utf8Path;
use reqwest::multipart::{Form, Part};
use std::fs;
use url::Url;

const LOG_TARGET: &str = "    upload";

/// Job submission endpoint of the public Coveralls service.
pub const COVERALLS_JOBS_URL: &str = "https://coveralls.io/api/v1/jobs";

const FORM_FIELD: &str = "json_file";
const FORM_FILE_NAME: &str = "json_file";
const FORM_CONTENT_TYPE: &str = "gzip/json";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Read a coverage report in binary mode.
pub fn read_payload(path: &Utf8Path) -> Result<Vec<u8>, UploadError> {
    fs::read(path).map_err(|source| UploadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Submits coverage reports to a job endpoint.
///
/// Each call to [`Uploader::submit`] is one independent POST; an `Uploader` holds no
/// state besides its HTTP client and target URL.
#[derive(Debug, Clone)]
pub struct Uploader {
    client: reqwest::Client,
    endpoint: Url,
}

impl Uploader {
    pub fn new(endpoint: Url) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| UploadError::Network {
                endpoint: endpoint.clone(),
                source,
            })?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Read the report at `path` and submit it.
    pub async fn upload_file(&self, path: &Utf8Path) -> Result<String, UploadError> {
        let payload = read_payload(path)?;
        log::debug!(target: LOG_TARGET, "Read {} bytes from '{path}'", payload.len());

        self.submit(&payload).await
    }

    /// Submit a coverage report and return the URL of the result document.
    ///
    /// The returned URL is derived from the service response; the document behind it
    /// may not exist yet while the service is still processing the job.
    pub async fn submit(&self, payload: &[u8]) -> Result<String, UploadError> {
        let compressed = compress_payload(payload)?;

        log::info!(
            target: LOG_TARGET,
            "Submitting {} bytes ({} compressed) to '{}'",
            payload.len(),
            compressed.len(),
            self.endpoint
        );

        let part = Part::bytes(compressed)
            .file_name(FORM_FILE_NAME)
            .mime_str(FORM_CONTENT_TYPE)
            .map_err(|source| self.network_error(source))?;
        let form = Form::new().part(FORM_FIELD, part);

        let response = self
            .client
            .post(self.endpoint.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|source| self.network_error(source))?;

        let status = response.status();
        let body = response.text().await.map_err(|source| self.network_error(source))?;

        log::debug!(target: LOG_TARGET, "Received HTTP {status} with a {} byte body", body.len());

        parse_job_response(status.as_u16(), &body)
    }

    fn network_error(&self, source: reqwest::Error) -> UploadError {
        UploadError::Network {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_payload_is_binary_exact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let bytes = [0x00, 0xff, 0x0d, 0x0a, 0x7b];
        file.write_all(&bytes).unwrap();

        let path = Utf8Path::from_path(file.path()).unwrap();
        assert_eq!(read_payload(path).unwrap(), bytes);
    }

    #[test]
    fn test_read_payload_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8Path::from_path(dir.path()).unwrap().join("coverage.json");

        let err = read_payload(&path).unwrap_err();
        assert!(matches!(&err, UploadError::FileAccess { path: p, .. } if *p == path));
    }

    #[test]
    fn test_uploader_keeps_endpoint() {
        let endpoint = Url::parse(COVERALLS_JOBS_URL).unwrap();
        let uploader = Uploader::new(endpoint.clone()).unwrap();

        assert_eq!(uploader.endpoint(), &endpoint);
    }
}
