//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Simulated latency exceeds maximum allowed (10000 ms)")]
    LatencyTooLarge,

    #[error("Simulated latency must be shorter than the request timeout")]
    LatencyExceedsTimeout,

    #[error("Upload size limit must be greater than zero")]
    InvalidUploadLimit,

    #[error("Contract fixture path is empty")]
    EmptyFixturePath,
}
