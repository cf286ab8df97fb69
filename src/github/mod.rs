//! GitHub workflow module
//!
//! Endpoint operations live in the `seedpr-github` crate. This module adds the
//! composite workflow that chains them:
//!
//! - [`api`]: `add_text_file`, the add-file-as-pull-request sequence
//! - [`types`]: Options for the workflow
//!
//! ```rust,no_run
//! use seedpr::github::{AddFileOptions, add_text_file};
//! use seedpr_github::{ClientOptions, GitHubClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GitHubClient::new("your_token", "octocat", &ClientOptions::default())?;
//! let repos = client.list_repositories().await?;
//! let options = AddFileOptions::new("hello.txt", "Hello, World!", "master");
//! let pr = add_text_file(&client, &repos[0], &options).await?;
//! println!("Pull request: {}", pr.html_url);
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod types;

// Re-export commonly used items for convenience
pub use api::add_text_file;
pub use types::{AddFileOptions, feature_branch_name};
