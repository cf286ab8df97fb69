//! Request transport
//!
//! Every call to the API goes through a [`Transport`]. The production
//! implementation is [`HttpTransport`], which attaches the standard headers
//! (accept type, bearer credential, client identifier) to every request and
//! performs exactly one attempt per call.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;

/// GitHub API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Media type requested from the API
pub const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("seedpr/", env!("CARGO_PKG_VERSION"));

/// A single outbound API call, relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Raw status and body of an API response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for any status in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the API
///
/// Implementations perform a single attempt per request and must not inspect
/// the response status; classification is done by [`crate::check_status`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;

    /// Release any resources held by the transport
    fn close(&self) {}
}

/// Options used when building the default HTTP transport
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_url: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
    pub verbose: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            verbose: false,
        }
    }
}

impl ClientOptions {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Build the headers attached to every request
///
/// # Errors
/// Returns an error if the token or user agent contain characters that are not
/// valid in an HTTP header value.
pub fn standard_headers(token: &str, user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
        .context("GitHub token contains characters not allowed in an HTTP header")?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).context("Invalid User-Agent header value")?,
    );
    Ok(headers)
}

/// Transport backed by a reqwest client
pub struct HttpTransport {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl HttpTransport {
    pub fn new(token: &str, options: &ClientOptions) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: options.api_url.trim_end_matches('/').to_string(),
            headers: standard_headers(token, &options.user_agent)?,
        })
    }

    /// Absolute URL for an API path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(self.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("Request failed: {} {}", request.method, url))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_headers_are_attached() {
        let headers = standard_headers("secret", DEFAULT_USER_AGENT).unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/vnd.github+json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert!(
            headers
                .get(USER_AGENT)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("seedpr/")
        );
    }

    #[test]
    fn test_standard_headers_reject_newline_in_token() {
        assert!(standard_headers("bad\ntoken", DEFAULT_USER_AGENT).is_err());
    }

    #[test]
    fn test_success_range() {
        assert!(!ApiResponse::new(199, "").is_success());
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(201, "").is_success());
        assert!(ApiResponse::new(299, "").is_success());
        assert!(!ApiResponse::new(300, "").is_success());
        assert!(!ApiResponse::new(404, "").is_success());
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let options = ClientOptions::default().with_api_url("https://ghe.example.com/api/v3/");
        let transport = HttpTransport::new("token", &options).unwrap();

        assert_eq!(
            transport.url_for("/user/repos"),
            "https://ghe.example.com/api/v3/user/repos"
        );
    }

    #[test]
    fn test_request_constructors() {
        let get = ApiRequest::get("/user");
        assert_eq!(get.method, Method::GET);
        assert!(get.body.is_none());

        let post = ApiRequest::post("/x", serde_json::json!({"a": 1}));
        assert_eq!(post.method, Method::POST);
        assert_eq!(post.body.unwrap()["a"], 1);

        let put = ApiRequest::put("/y", serde_json::json!({}));
        assert_eq!(put.method, Method::PUT);
    }
}
