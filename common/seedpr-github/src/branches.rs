//! Branch operations

use crate::client::GitHubClient;
use crate::repositories::Repository;
use crate::transport::ApiRequest;
use crate::util::{encode_path, ref_for_branch};
use anyhow::Result;
use serde::Deserialize;
use serde_json::json;

/// Commit a branch points to
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    pub sha: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub commit: CommitRef,
}

impl Branch {
    pub fn head_commit_sha(&self) -> &str {
        &self.commit.sha
    }
}

impl GitHubClient {
    /// Get a branch of one of the account's repositories
    ///
    /// A missing branch or repository is reported through the same
    /// [`crate::ApiError`] as any other rejected request.
    pub async fn get_branch(&self, repo: &Repository, branch_name: &str) -> Result<Branch> {
        let path = self.repo_path(repo, &format!("branches/{}", encode_path(branch_name)));
        self.execute_json(ApiRequest::get(path)).await
    }

    /// Resolve the commit SHA a branch currently points to
    pub async fn resolve_branch_head(&self, repo: &Repository, branch_name: &str) -> Result<String> {
        let branch = self.get_branch(repo, branch_name).await?;
        Ok(branch.commit.sha)
    }

    /// Create a new branch pointing at `sha`
    ///
    /// Not idempotent: if the ref already exists the API answers with an
    /// error status which is returned as an [`crate::ApiError`].
    pub async fn create_branch(
        &self,
        repo: &Repository,
        sha: &str,
        new_branch_name: &str,
    ) -> Result<()> {
        let payload = json!({
            "ref": ref_for_branch(new_branch_name),
            "sha": sha,
        });

        self.execute(ApiRequest::post(self.repo_path(repo, "git/refs"), payload))
            .await?;
        Ok(())
    }
}
