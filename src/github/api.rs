//! GitHub API workflows

use super::types::AddFileOptions;
use anyhow::Result;
use colored::*;
use seedpr_github::{GitHubClient, PullRequest, PullRequestParams, Repository};

/// Add a text file to a repository through a pull request
///
/// Runs a fixed sequence, each step only after the previous one succeeded:
/// 1. Resolve the head commit of the base branch
/// 2. Create the feature branch from that commit
/// 3. Commit the file onto the feature branch
/// 4. Open a pull request from the feature branch into the base branch
///
/// Nothing is rolled back: if a later step fails, a branch or file created by
/// an earlier step stays on the remote.
pub async fn add_text_file(
    client: &GitHubClient,
    repo: &Repository,
    options: &AddFileOptions,
) -> Result<PullRequest> {
    let branch_name = options.branch_name();

    let sha = client
        .resolve_branch_head(repo, &options.base_branch)
        .await?;

    client.create_branch(repo, &sha, &branch_name).await?;
    println!(
        "{} | {} {}",
        repo.name.cyan().bold(),
        "Created branch".green(),
        branch_name
    );

    client
        .create_file(
            repo,
            &options.content,
            &options.filename,
            &branch_name,
            &options.commit_message(),
        )
        .await?;
    println!(
        "{} | {} {} on {}",
        repo.name.cyan().bold(),
        "Committed".green(),
        options.filename,
        branch_name
    );

    let title = options.pr_title();
    let body = options.pr_body();
    let pr = client
        .create_pull_request(PullRequestParams::new(
            repo,
            &title,
            &branch_name,
            &options.base_branch,
            &body,
        ))
        .await?;
    println!(
        "{} | {} {}",
        repo.name.cyan().bold(),
        "Pull request created:".green(),
        pr.html_url
    );

    Ok(pr)
}
