//! seedpr - add a file to one of your GitHub repositories through a pull request

pub mod commands;
pub mod config;
pub mod constants;
pub mod github;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, Credentials};
pub use github::{AddFileOptions, add_text_file};
