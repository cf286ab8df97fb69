//! Pull request operations

use crate::client::GitHubClient;
use crate::repositories::Repository;
use crate::transport::ApiRequest;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct CreatePullRequestPayload<'a> {
    title: &'a str,
    head: &'a str,
    base: &'a str,
    body: &'a str,
}

/// Pull request returned by the creation call
///
/// Only used for confirmation output, so every field is optional on the wire.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub html_url: String,
}

/// Parameters for creating a pull request
#[derive(Debug, Clone)]
pub struct PullRequestParams<'a> {
    pub repo: &'a Repository,
    pub title: &'a str,
    pub head: &'a str,
    pub base: &'a str,
    pub body: &'a str,
}

impl<'a> PullRequestParams<'a> {
    pub fn new(
        repo: &'a Repository,
        title: &'a str,
        head: &'a str,
        base: &'a str,
        body: &'a str,
    ) -> Self {
        Self {
            repo,
            title,
            head,
            base,
            body,
        }
    }
}

impl GitHubClient {
    /// Open a pull request from `head` into `base`
    ///
    /// No check is made that the branches differ or that there is a diff
    /// between them; the API decides.
    ///
    /// # Errors
    /// Returns an [`crate::ApiError`] if the API rejects the pull request.
    pub async fn create_pull_request(&self, params: PullRequestParams<'_>) -> Result<PullRequest> {
        let payload = serde_json::to_value(CreatePullRequestPayload {
            title: params.title,
            head: params.head,
            base: params.base,
            body: params.body,
        })
        .context("Failed to serialize pull request payload")?;

        let response = self
            .execute(ApiRequest::post(
                self.repo_path(params.repo, "pulls"),
                payload,
            ))
            .await?;

        // The request already succeeded; an unexpected body only loses the link.
        Ok(serde_json::from_str(&response.body).unwrap_or_default())
    }
}
