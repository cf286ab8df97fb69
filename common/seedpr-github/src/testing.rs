//! In-memory transport for tests
//!
//! Compiled for this crate's unit tests and, behind the `test-support`
//! feature, for integration tests of dependent crates.

use crate::client::GitHubClient;
use crate::repositories::Repository;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Requests seen by a [`ScriptedTransport`]
#[derive(Clone, Default)]
pub struct RequestLog {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    closed: Arc<Mutex<usize>>,
}

impl RequestLog {
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    pub fn close_count(&self) -> usize {
        *self.closed.lock().unwrap()
    }
}

/// Replays canned responses in order and records every request
///
/// Running out of responses behaves like a dropped connection.
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<ApiResponse>>,
    log: RequestLog,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<ApiResponse>) -> (Self, RequestLog) {
        let log = RequestLog::default();
        let transport = Self {
            responses: Mutex::new(responses.into()),
            log: log.clone(),
        };
        (transport, log)
    }

    /// Client for `octocat` backed by a fresh scripted transport
    pub fn client(responses: Vec<ApiResponse>) -> (GitHubClient, RequestLog) {
        let (transport, log) = Self::new(responses);
        (GitHubClient::with_transport(transport, "octocat"), log)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.log.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("connection reset while calling {}", request.path))
    }

    fn close(&self) {
        *self.log.closed.lock().unwrap() += 1;
    }
}

pub fn sample_repo() -> Repository {
    Repository {
        name: "hello-world".to_string(),
        full_name: "octocat/hello-world".to_string(),
    }
}

pub fn not_found() -> ApiResponse {
    ApiResponse::new(
        404,
        r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest","status":"404"}"#,
    )
}
