//! Base types and traits for the command pattern

use crate::config::Config;
use anyhow::Result;
use seedpr_github::GitHubClient;

/// Context passed to all commands containing shared configuration and options
#[derive(Clone)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: Config,
    /// Echo API requests to stderr
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(config: Config, verbose: bool) -> Self {
        Self { config, verbose }
    }

    /// Validate credentials and open a client session
    ///
    /// # Errors
    /// Returns a [`crate::utils::ValidationError`] if the token or account is
    /// missing, before anything is sent over the network.
    pub fn connect(&self) -> Result<GitHubClient> {
        let credentials = self.config.credentials()?;
        GitHubClient::new(
            credentials.token(),
            credentials.account(),
            &self.config.client_options(self.verbose),
        )
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
