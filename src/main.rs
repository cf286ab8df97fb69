use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use seedpr::commands::validators::CommandValidationError;
use seedpr::commands::{AddFileCommand, Command, CommandContext, ListCommand};
use seedpr::utils::{ValidationError, exit_codes};
use seedpr::{AddFileOptions, config::Config, constants};
use seedpr_github::ApiError;

#[derive(Parser)]
#[command(name = "seedpr")]
#[command(about = "Add a file to one of your GitHub repositories through a pull request")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
    config: String,

    /// Print every API request and response status to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a repository and add a file to it through a pull request (default)
    Add {
        /// Path of the file to add
        #[arg(long, default_value_t = constants::workflow::DEFAULT_FILE_NAME.to_string())]
        file: String,

        /// Text content of the file
        #[arg(long, default_value_t = constants::workflow::DEFAULT_FILE_CONTENT.to_string())]
        content: String,

        /// Branch the pull request targets
        #[arg(long, default_value_t = constants::workflow::DEFAULT_BASE_BRANCH.to_string())]
        base: String,

        /// Commit message
        #[arg(long)]
        message: Option<String>,

        /// Title for the pull request
        #[arg(long)]
        title: Option<String>,

        /// Body text for the pull request
        #[arg(long)]
        body: Option<String>,

        /// Repository number from the menu, instead of prompting
        #[arg(short, long)]
        select: Option<String>,
    },

    /// List repositories of the authenticated user
    Ls {
        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        report_error(&error);

        let code = exit_codes::exit_code_for(&error);
        if code != exit_codes::SUCCESS {
            std::process::exit(code);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(&cli.config)?;
    let context = CommandContext::new(config, cli.verbose);

    match cli.command {
        Some(Commands::Add {
            file,
            content,
            base,
            message,
            title,
            body,
            select,
        }) => {
            let mut options = AddFileOptions::new(file, content, base);
            if let Some(message) = message {
                options = options.with_commit_message(message);
            }
            if let Some(title) = title {
                options = options.with_title(title);
            }
            if let Some(body) = body {
                options = options.with_body(body);
            }

            AddFileCommand {
                options,
                selection: select,
            }
            .execute(&context)
            .await?;
        }
        Some(Commands::Ls { json }) => {
            ListCommand { json }.execute(&context).await?;
        }
        None => {
            AddFileCommand::new(AddFileOptions::default())
                .execute(&context)
                .await?;
        }
    }

    Ok(())
}

fn report_error(error: &anyhow::Error) {
    if let Some(validation) = error.downcast_ref::<ValidationError>() {
        println!("{}", validation.to_string().yellow());
    } else if let Some(argument) = error.downcast_ref::<CommandValidationError>() {
        println!("{}", argument.to_string().yellow());
    } else if let Some(api_error) = error.downcast_ref::<ApiError>() {
        eprintln!("{}", format!("Error: {}", api_error).red());
        if !api_error.documentation_url.is_empty() {
            eprintln!("  see {}", api_error.documentation_url);
        }
    } else {
        eprintln!("{}", format!("Error: {:#}", error).red());
    }
}
