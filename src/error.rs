use thiserror::Error;

/// Unified error type for raven-deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Incorrect version bump: {0}")]
    InvalidBumpKind(String),

    #[error("Command failed: {command}: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in raven-deploy
pub type Result<T> = std::result::Result<T, DeployError>;

impl DeployError {
    /// Create a command failure for the given command line
    pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        DeployError::CommandFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        DeployError::Version(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        DeployError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DeployError::Config(msg.into())
    }

    /// Create a prompt error with context
    pub fn prompt(msg: impl Into<String>) -> Self {
        DeployError::Prompt(msg.into())
    }
}
