//! Configuration file loading

use super::Credentials;
use crate::constants::config::{ACCOUNT_ENV, TOKEN_ENV};
use crate::utils::validators::ValidationError;
use anyhow::{Context, Result};
use seedpr_github::ClientOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings read from `seedpr.yaml` and the environment
///
/// ```yaml
/// token: ghp_xxx
/// account: octocat
/// api_url: https://api.github.com
/// timeout_secs: 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))
    }

    /// Load configuration from a file if it exists, otherwise start empty
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Load the file (if any) and apply environment overrides
    pub fn resolve(path: &str) -> Result<Self> {
        Ok(Self::load_or_default(path)?.apply_env())
    }

    /// Override token and account from `GITHUB_TOKEN` / `GITHUB_ACCOUNT`
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Override token and account using an arbitrary variable lookup
    ///
    /// Blank values are ignored so an empty variable does not hide the file.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(token) = non_blank(TOKEN_ENV) {
            self.token = Some(token);
        }
        if let Some(account) = non_blank(ACCOUNT_ENV) {
            self.account = Some(account);
        }
        self
    }

    /// Validated credentials for this run
    pub fn credentials(&self) -> Result<Credentials, ValidationError> {
        Credentials::new(self.token.as_deref(), self.account.as_deref())
    }

    /// Options for the API client
    pub fn client_options(&self, verbose: bool) -> ClientOptions {
        let mut options = ClientOptions::default().verbose(verbose);

        if let Some(api_url) = self.api_url.as_deref().filter(|url| !url.trim().is_empty()) {
            options = options.with_api_url(api_url.trim());
        }
        if let Some(secs) = self.timeout_secs.filter(|secs| *secs > 0) {
            options = options.with_timeout(Duration::from_secs(secs));
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedpr_github::{DEFAULT_API_BASE, DEFAULT_USER_AGENT};

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = Config {
            token: Some("from-file".to_string()),
            account: Some("file-account".to_string()),
            ..Config::default()
        }
        .apply_env_from(env(&[(TOKEN_ENV, "from-env")]));

        assert_eq!(config.token.as_deref(), Some("from-env"));
        assert_eq!(config.account.as_deref(), Some("file-account"));
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = Config {
            account: Some("file-account".to_string()),
            ..Config::default()
        }
        .apply_env_from(env(&[(ACCOUNT_ENV, "  ")]));

        assert_eq!(config.account.as_deref(), Some("file-account"));
    }

    #[test]
    fn test_client_options_defaults() {
        let options = Config::new().client_options(false);
        assert_eq!(options.api_url, DEFAULT_API_BASE);
        assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
        assert!(options.timeout.is_none());
        assert!(!options.verbose);
    }

    #[test]
    fn test_client_options_overrides() {
        let config = Config {
            api_url: Some("https://ghe.example.com/api/v3".to_string()),
            timeout_secs: Some(15),
            ..Config::default()
        };

        let options = config.client_options(true);
        assert_eq!(options.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(options.timeout, Some(Duration::from_secs(15)));
        assert!(options.verbose);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = Config {
            timeout_secs: Some(0),
            ..Config::default()
        };
        assert!(config.client_options(false).timeout.is_none());
    }
}
