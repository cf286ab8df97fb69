//! Common test support utilities and fixtures
//!
//! Response fixtures on top of the scripted transport from `seedpr-github`, so
//! workflow and command tests run without network access and can inspect
//! exactly which requests were sent.

#![allow(dead_code)]

use seedpr_github::testing::ScriptedTransport;
use seedpr_github::{ApiResponse, GitHubClient, Repository};

pub use seedpr_github::testing::RequestLog;

pub const ACCOUNT: &str = "octocat";

/// Build a client over a scripted transport
pub fn scripted_client(responses: Vec<ApiResponse>) -> (GitHubClient, RequestLog) {
    ScriptedTransport::client(responses)
}

pub fn repo(name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        full_name: format!("{}/{}", ACCOUNT, name),
    }
}

pub fn ok(body: &str) -> ApiResponse {
    ApiResponse::new(200, body)
}

pub fn created(body: &str) -> ApiResponse {
    ApiResponse::new(201, body)
}

pub fn api_error(status: u16, message: &str) -> ApiResponse {
    ApiResponse::new(
        status,
        format!(
            r#"{{"message":"{}","documentation_url":"https://docs.github.com/rest","status":"{}"}}"#,
            message, status
        ),
    )
}

pub fn user_body() -> &'static str {
    r#"{"login":"octocat","id":1}"#
}

pub fn repos_body(names: &[&str]) -> String {
    let items: Vec<String> = names
        .iter()
        .map(|name| format!(r#"{{"name":"{0}","full_name":"{1}/{0}"}}"#, name, ACCOUNT))
        .collect();
    format!("[{}]", items.join(","))
}

/// Successful responses for the four add-file steps, in call order
pub fn add_file_responses() -> Vec<ApiResponse> {
    vec![
        ok(r#"{"name":"master","commit":{"sha":"abc123"}}"#),
        created(r#"{"ref":"refs/heads/feat/hello.txt","object":{"sha":"abc123"}}"#),
        created(r#"{"content":{"name":"hello.txt"}}"#),
        created(r#"{"number":42,"html_url":"https://github.com/octocat/hello-world/pull/42"}"#),
    ]
}
