//! Add-file command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::github::{AddFileOptions, add_text_file};
use crate::utils::selection::{parse_selection, prompt_selection, render_menu};
use crate::utils::validators::ValidationError;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use seedpr_github::GitHubClient;
use std::io;

/// Add a file to a chosen repository through a pull request
pub struct AddFileCommand {
    pub options: AddFileOptions,
    /// Menu selection given up front instead of prompting
    pub selection: Option<String>,
}

#[async_trait]
impl Command for AddFileCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_file_name(&self.options.filename)?;
        validators::validate_branch_name(&self.options.base_branch)?;
        validators::validate_commit_message(&self.options.commit_msg)?;

        let client = context.connect()?;
        self.run_session(client).await
    }
}

impl AddFileCommand {
    pub fn new(options: AddFileOptions) -> Self {
        Self {
            options,
            selection: None,
        }
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    /// Run the workflow on `client` and close it whatever the outcome
    pub async fn run_session(&self, client: GitHubClient) -> Result<()> {
        let result = self.run(&client).await;
        client.close();
        result
    }

    async fn run(&self, client: &GitHubClient) -> Result<()> {
        client.check_login().await?;
        println!(
            "{}",
            format!("Authenticated as {}", client.account()).green()
        );

        let repositories = client.list_repositories().await?;
        if repositories.is_empty() {
            return Err(ValidationError::NoRepositories.into());
        }

        print!("{}", render_menu(&repositories));
        let index = match &self.selection {
            Some(input) => parse_selection(input, repositories.len())?,
            None => read_selection(repositories.len())?,
        };

        add_text_file(client, &repositories[index], &self.options).await?;
        Ok(())
    }
}

fn read_selection(count: usize) -> Result<usize> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_selection(&mut stdin.lock(), &mut stdout, count)
}
