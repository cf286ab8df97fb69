//! Command implementations

pub mod add;
pub mod base;
pub mod ls;
pub mod validators;

pub use add::AddFileCommand;
pub use base::{Command, CommandContext};
pub use ls::ListCommand;
