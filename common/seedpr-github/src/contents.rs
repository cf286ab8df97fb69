//! Repository contents operations

use crate::client::GitHubClient;
use crate::repositories::Repository;
use crate::transport::ApiRequest;
use crate::util::{encode_content, encode_path};
use anyhow::Result;
use serde_json::json;

impl GitHubClient {
    /// Create a file on a branch with a single commit
    ///
    /// # Arguments
    /// * `repo` - Repository to write to
    /// * `content` - Plain text content; it is base64 encoded before sending
    /// * `filename` - Path of the file inside the repository
    /// * `branch_name` - Branch receiving the commit
    /// * `message` - Commit message
    ///
    /// # Errors
    /// Returns an [`crate::ApiError`] if the file already exists on the branch
    /// or the request is otherwise rejected.
    pub async fn create_file(
        &self,
        repo: &Repository,
        content: &str,
        filename: &str,
        branch_name: &str,
        message: &str,
    ) -> Result<()> {
        let path = self.repo_path(repo, &format!("contents/{}", encode_path(filename)));
        let payload = json!({
            "message": message,
            "content": encode_content(content),
            "branch": branch_name,
        });

        self.execute(ApiRequest::put(path, payload)).await?;
        Ok(())
    }
}
