use super::UploadError;
use serde_json::Value;

const LOG_TARGET: &str = "  response";

const URL_FIELD: &str = "url";
const MESSAGE_FIELD: &str = "message";
const RESULT_SUFFIX: &str = ".json";

/// Turn the body of a job submission response into the URL of the result document.
///
/// The body is authoritative: a JSON document carrying a string `url` is accepted
/// whatever the status code, and anything that is not JSON is rejected with the
/// status and the raw body so the caller can see what the service said.
pub fn parse_job_response(status: u16, body: &str) -> Result<String, UploadError> {
    let document: Value = serde_json::from_str(body).map_err(|e| {
        log::debug!(target: LOG_TARGET, "Response body is not JSON: {e}");
        UploadError::Submission {
            status,
            body: body.to_string(),
        }
    })?;

    let Some(url) = document.get(URL_FIELD).and_then(Value::as_str) else {
        return Err(UploadError::MissingField {
            field: URL_FIELD,
            status,
            message: document.get(MESSAGE_FIELD).and_then(Value::as_str).map(str::to_string),
        });
    };

    log::debug!(target: LOG_TARGET, "Job stored at '{url}'");

    Ok(format!("{url}{RESULT_SUFFIX}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_json_suffix() {
        let url = parse_job_response(200, r#"{"url": "https://coveralls.io/jobs/abc123"}"#).unwrap();
        assert_eq!(url, "https://coveralls.io/jobs/abc123.json");
    }

    #[test]
    fn test_ignores_extra_fields() {
        let body = r#"{"message": "Job #12.1", "url": "https://coveralls.io/jobs/12"}"#;
        assert_eq!(parse_job_response(200, body).unwrap(), "https://coveralls.io/jobs/12.json");
    }

    #[test]
    fn test_body_wins_over_status() {
        let body = r#"{"url": "https://coveralls.io/jobs/7"}"#;
        assert_eq!(parse_job_response(201, body).unwrap(), "https://coveralls.io/jobs/7.json");
    }

    #[test]
    fn test_plain_text_is_submission_error() {
        let err = parse_job_response(500, "Internal Server Error").unwrap_err();

        assert!(matches!(&err, UploadError::Submission { status: 500, body } if body == "Internal Server Error"));
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("Internal Server Error"));
    }

    #[test]
    fn test_empty_body_is_submission_error() {
        let err = parse_job_response(502, "").unwrap_err();
        assert!(matches!(err, UploadError::Submission { status: 502, .. }));
    }

    #[test]
    fn test_missing_url_is_missing_field() {
        let err = parse_job_response(200, r#"{"status": "ok"}"#).unwrap_err();

        assert!(matches!(
            err,
            UploadError::MissingField {
                field: "url",
                status: 200,
                message: None
            }
        ));
    }

    #[test]
    fn test_missing_url_keeps_service_message() {
        let body = r#"{"message": "Couldn't find a repository matching this job.", "error": true}"#;
        let err = parse_job_response(422, body).unwrap_err();

        assert!(err.to_string().contains("Couldn't find a repository matching this job."));
    }

    #[test]
    fn test_non_string_url_is_missing_field() {
        let err = parse_job_response(200, r#"{"url": 42}"#).unwrap_err();
        assert!(matches!(err, UploadError::MissingField { .. }));
    }

    #[test]
    fn test_non_object_json_is_missing_field() {
        let err = parse_job_response(200, r#"["https://coveralls.io/jobs/1"]"#).unwrap_err();
        assert!(matches!(err, UploadError::MissingField { .. }));
    }
}
