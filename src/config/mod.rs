//! Configuration management module

pub mod credentials;
pub mod loader;

pub use credentials::Credentials;
pub use loader::Config;
