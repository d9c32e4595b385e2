use thiserror::Error;

use crate::client::ClientError;
use crate::config::ConfigError;

/// Custom error types for the scriptforge pipeline
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("Completion service error: {0}")]
    ClientError(#[from] ClientError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Generation failed: {0}")]
    GenerationError(String),

    #[error("Materialization error: {0}")]
    MaterializeError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Result type specific to scriptforge operations
pub type ForgeResult<T> = Result<T, ForgeError>;
