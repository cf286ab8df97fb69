//! GitHub client implementation
//!
//! [`GitHubClient`] is the session for a single run: it owns the transport
//! (and through it the credential) together with the account identifier used
//! to address repositories. Endpoint operations are added by `impl` blocks in
//! the sibling modules.

use crate::error::check_status;
use crate::repositories::Repository;
use crate::transport::{ApiRequest, ApiResponse, ClientOptions, HttpTransport, Transport};
use crate::util::encode_path;
use anyhow::{Context, Result};
use colored::*;
use serde::de::DeserializeOwned;

/// GitHub API client bound to one account
pub struct GitHubClient {
    transport: Box<dyn Transport>,
    account: String,
    verbose: bool,
}

impl GitHubClient {
    /// Create a client that talks HTTP to the API described by `options`
    ///
    /// # Errors
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(token: &str, account: impl Into<String>, options: &ClientOptions) -> Result<Self> {
        let transport = HttpTransport::new(token, options)?;
        Ok(Self {
            transport: Box::new(transport),
            account: account.into(),
            verbose: options.verbose,
        })
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: impl Transport + 'static, account: impl Into<String>) -> Self {
        Self {
            transport: Box::new(transport),
            account: account.into(),
            verbose: false,
        }
    }

    /// Echo request lines and statuses to stderr
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Account identifier repositories are addressed under
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Path of a repository-scoped endpoint, e.g. `/repos/{account}/{repo}/pulls`
    ///
    /// `endpoint` is inserted as is; callers encode any user supplied segment.
    pub(crate) fn repo_path(&self, repo: &Repository, endpoint: &str) -> String {
        format!(
            "/repos/{}/{}/{}",
            encode_path(&self.account),
            encode_path(&repo.name),
            endpoint
        )
    }

    /// Send a request and fail on any non-2xx status
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        if self.verbose {
            eprintln!(
                "{}",
                format!("-> {} {}", request.method, request.path).dimmed()
            );
        }

        let response = self.transport.send(&request).await?;

        if self.verbose {
            eprintln!(
                "{}",
                format!("<- {} {}", response.status, request.path).dimmed()
            );
        }

        check_status(&response)?;
        Ok(response)
    }

    /// Send a request and deserialize the JSON success body
    pub(crate) async fn execute_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let path = request.path.clone();
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body)
            .with_context(|| format!("Failed to parse GitHub API response from {}", path))
    }

    /// Release the transport. Consumes the client so it can only happen once.
    pub fn close(self) {
        self.transport.close();
    }
}
