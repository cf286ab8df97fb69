//! Utility modules for common functionality

pub mod exit_codes;
pub mod selection;
pub mod validators;

// Re-export commonly used functions
pub use exit_codes::exit_code_for;
pub use selection::{parse_selection, prompt_selection, render_menu};
pub use validators::ValidationError;
