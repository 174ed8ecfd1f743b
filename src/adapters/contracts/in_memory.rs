//! In-memory contract table.
//!
//! Holds the table behind an `Arc` so every request shares one read-only
//! copy. The table is either the built-in fixtures or a YAML file loaded once
//! at startup.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::lifecycle::{Contract, CONTRACT_FIXTURES};
use crate::ports::{ContractReadError, ContractReader};

/// Errors raised while loading a contract table file.
#[derive(Debug, Error)]
pub enum ContractLoadError {
    #[error("Failed to read contract file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse contract table: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Contract reader over a fixed, in-memory table.
#[derive(Debug, Clone)]
pub struct InMemoryContractReader {
    contracts: Arc<Vec<Contract>>,
}

impl InMemoryContractReader {
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self {
            contracts: Arc::new(contracts),
        }
    }

    /// Reader over the built-in six-contract table.
    pub fn with_fixtures() -> Self {
        Self::new(CONTRACT_FIXTURES.clone())
    }

    /// Parses a YAML sequence of contracts.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ContractLoadError> {
        let contracts: Vec<Contract> = serde_yaml::from_str(yaml)?;
        Ok(Self::new(contracts))
    }

    /// Loads a YAML contract table from disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ContractLoadError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ContractLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let reader = Self::from_yaml_str(&yaml)?;
        tracing::info!(
            path = %path.display(),
            contracts = reader.contracts.len(),
            "Loaded contract table"
        );
        Ok(reader)
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

#[async_trait]
impl ContractReader for InMemoryContractReader {
    async fn list_contracts(&self) -> Result<Vec<Contract>, ContractReadError> {
        Ok(self.contracts.as_ref().clone())
    }
}
