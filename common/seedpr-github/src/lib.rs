//! GitHub API client library
//!
//! This library provides the transport and per-endpoint operations used by
//! seedpr: credential check, repository listing, branch resolution and
//! creation, file commits and pull request creation.
//!
//! ## Modules
//!
//! - [`client`]: Session client owning the transport and account identifier
//! - [`transport`]: Request/response types and the HTTP transport
//! - [`error`]: Structured API errors and the uniform status check
//! - [`users`]: Authenticated user check
//! - [`repositories`]: Repository listing
//! - [`branches`]: Branch head resolution and branch creation
//! - [`contents`]: File creation
//! - [`pull_requests`]: Pull request creation
//! - [`testing`]: Scripted transport for tests (`test-support` feature)

mod branches;
mod client;
mod contents;
mod error;
mod pull_requests;
mod repositories;
mod transport;
mod users;
mod util;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Re-export public API
pub use branches::{Branch, CommitRef};
pub use client::GitHubClient;
pub use error::{ApiError, check_status};
pub use pull_requests::{PullRequest, PullRequestParams};
pub use repositories::Repository;
pub use transport::{
    ACCEPT_HEADER, ApiRequest, ApiResponse, ClientOptions, DEFAULT_API_BASE, DEFAULT_USER_AGENT,
    HttpTransport, Transport, standard_headers,
};
pub use util::{encode_content, encode_path, ref_for_branch};

/// HTTP method re-exported so callers can build requests without a direct reqwest dependency
pub use reqwest::Method;
