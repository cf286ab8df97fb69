//! Central constants for the seedpr application

/// Defaults for the add-file workflow
pub mod workflow {
    /// File added when none is given on the command line
    pub const DEFAULT_FILE_NAME: &str = "hello.txt";

    /// Content of the default file
    pub const DEFAULT_FILE_CONTENT: &str = "Hello, World!";

    /// Branch the pull request targets by default
    pub const DEFAULT_BASE_BRANCH: &str = "master";

    /// Prefix for the branch created for a new file
    pub const BRANCH_PREFIX: &str = "feat/";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "seedpr.yaml";

    /// Environment variable overriding the configured token
    pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

    /// Environment variable overriding the configured account
    pub const ACCOUNT_ENV: &str = "GITHUB_ACCOUNT";
}
