use super::UploadError;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

/// Gzip a coverage report at the default compression level.
pub fn compress_payload(payload: &[u8]) -> Result<Vec<u8>, UploadError> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(payload.len() / 4), Compression::default());
    encoder.write_all(payload).map_err(UploadError::Compression)?;
    encoder.finish().map_err(UploadError::Compression)
}
