//! Contract table configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the contract table comes from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContractsConfig {
    /// YAML file replacing the built-in table
    pub fixture_path: Option<PathBuf>,
}

impl ContractsConfig {
    /// Validate contract table configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.fixture_path {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptyFixturePath),
            _ => Ok(()),
        }
    }
}
