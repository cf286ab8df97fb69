//! List command implementation

use super::{Command, CommandContext};
use crate::utils::selection::render_menu;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use seedpr_github::GitHubClient;

/// List command for displaying the authenticated user's repositories
pub struct ListCommand {
    /// Output in JSON format
    pub json: bool,
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = context.connect()?;
        self.run_session(client).await
    }
}

impl ListCommand {
    /// List repositories through `client` and close it whatever the outcome
    pub async fn run_session(&self, client: GitHubClient) -> Result<()> {
        let result = self.run(&client).await;
        client.close();
        result
    }

    async fn run(&self, client: &GitHubClient) -> Result<()> {
        client.check_login().await?;
        let repositories = client.list_repositories().await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&repositories)?);
            return Ok(());
        }

        if repositories.is_empty() {
            println!("{}", "No repositories found".yellow());
            return Ok(());
        }

        print!("{}", render_menu(&repositories));
        println!(
            "{}",
            format!("Total: {} repositories", repositories.len()).green()
        );
        Ok(())
    }
}
