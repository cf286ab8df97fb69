//! Structured API errors
//!
//! Every non-2xx response collapses into a single [`ApiError`] shape built from
//! the response body. Not found, conflict, unauthorized and rate limited all
//! look the same to callers.

use crate::transport::ApiResponse;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

/// Error returned by the API for a rejected request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub documentation_url: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GitHub API error ({}): {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Body sent by GitHub alongside a non-success status
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    documentation_url: Option<String>,
    #[serde(default, deserialize_with = "status_from_number_or_string")]
    status: Option<u16>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusField {
    Number(u16),
    Text(String),
}

// GitHub sends "status": "404"; older payloads and proxies send a number.
fn status_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StatusField>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StatusField::Number(status)) => Ok(Some(status)),
        Some(StatusField::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl ApiError {
    fn from_body(http_status: u16, body: ErrorBody) -> Self {
        Self {
            status: body.status.unwrap_or(http_status),
            message: body.message,
            documentation_url: body.documentation_url.unwrap_or_default(),
        }
    }
}

/// Check a response for a 2xx status
///
/// # Errors
/// - [`ApiError`] when the status is not 2xx and the body has the GitHub error shape
/// - a plain error carrying the raw status and body when the error body cannot be parsed
pub fn check_status(response: &ApiResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    let body: ErrorBody = serde_json::from_str(&response.body).with_context(|| {
        format!(
            "Unrecognised GitHub error response ({}): {}",
            response.status, response.body
        )
    })?;

    Err(ApiError::from_body(response.status, body).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_noop() {
        assert!(check_status(&ApiResponse::new(200, "{}")).is_ok());
        assert!(check_status(&ApiResponse::new(201, "not json at all")).is_ok());
        assert!(check_status(&ApiResponse::new(204, "")).is_ok());
    }

    #[test]
    fn test_error_body_fields_are_preserved() {
        let response = ApiResponse::new(
            404,
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest","status":404}"#,
        );

        let error = check_status(&response).unwrap_err();
        let api_error = error.downcast_ref::<ApiError>().unwrap();

        assert_eq!(
            api_error,
            &ApiError {
                status: 404,
                message: "Not Found".to_string(),
                documentation_url: "https://docs.github.com/rest".to_string(),
            }
        );
    }

    #[test]
    fn test_string_status_is_accepted() {
        let response = ApiResponse::new(
            422,
            r#"{"message":"Reference already exists","documentation_url":"https://docs.github.com/rest/git/refs","status":"422"}"#,
        );

        let error = check_status(&response).unwrap_err();
        let api_error = error.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api_error.status, 422);
        assert_eq!(api_error.message, "Reference already exists");
    }

    #[test]
    fn test_missing_optional_fields_fall_back() {
        let response = ApiResponse::new(401, r#"{"message":"Bad credentials"}"#);

        let error = check_status(&response).unwrap_err();
        let api_error = error.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api_error.status, 401);
        assert_eq!(api_error.documentation_url, "");
    }

    #[test]
    fn test_unparseable_error_body_is_not_api_error() {
        let response = ApiResponse::new(502, "<html>Bad Gateway</html>");

        let error = check_status(&response).unwrap_err();
        assert!(error.downcast_ref::<ApiError>().is_none());
        assert!(error.to_string().contains("502"));
    }

    #[test]
    fn test_display() {
        let error = ApiError {
            status: 409,
            message: "Conflict".to_string(),
            documentation_url: String::new(),
        };
        assert_eq!(error.to_string(), "GitHub API error (409): Conflict");
    }
}
