//! Repository-related operations

use crate::client::GitHubClient;
use crate::transport::ApiRequest;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Repository owned by or accessible to the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
}

impl GitHubClient {
    /// List repositories for the authenticated user
    ///
    /// Calls `GET /user/repos` and keeps the order the server returned. An
    /// empty list is a valid result.
    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        self.execute_json(ApiRequest::get("/user/repos")).await
    }
}
