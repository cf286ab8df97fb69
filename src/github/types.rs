//! GitHub workflow types

use crate::constants::workflow::{
    BRANCH_PREFIX, DEFAULT_BASE_BRANCH, DEFAULT_FILE_CONTENT, DEFAULT_FILE_NAME,
};

/// Name of the branch a file is added on
pub fn feature_branch_name(filename: &str) -> String {
    format!("{}{}", BRANCH_PREFIX, filename.trim_start_matches('/'))
}

/// Options for adding a file through a pull request
#[derive(Debug, Clone, PartialEq)]
pub struct AddFileOptions {
    pub filename: String,
    pub content: String,
    pub base_branch: String,
    pub commit_msg: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Default for AddFileOptions {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME, DEFAULT_FILE_CONTENT, DEFAULT_BASE_BRANCH)
    }
}

impl AddFileOptions {
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<String>,
        base_branch: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            base_branch: base_branch.into(),
            commit_msg: None,
            title: None,
            body: None,
        }
    }

    pub fn with_commit_message(mut self, commit_msg: String) -> Self {
        self.commit_msg = Some(commit_msg);
        self
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn branch_name(&self) -> String {
        feature_branch_name(&self.filename)
    }

    pub fn commit_message(&self) -> String {
        self.commit_msg
            .clone()
            .unwrap_or_else(|| format!("Add {}", self.filename))
    }

    pub fn pr_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Add {}", self.filename))
    }

    pub fn pr_body(&self) -> String {
        self.body
            .clone()
            .unwrap_or_else(|| format!("Adds {} to {}.", self.filename, self.base_branch))
    }
}
