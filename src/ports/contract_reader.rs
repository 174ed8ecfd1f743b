use async_trait::async_trait;

use crate::domain::lifecycle::Contract;

/// Read-only port for the contract table
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Returns every contract, in table order
    async fn list_contracts(&self) -> Result<Vec<Contract>, ContractReadError>;
}

/// Errors that can occur while reading contracts
#[derive(Debug, thiserror::Error)]
pub enum ContractReadError {
    #[error("Contract table unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyContractReader;

    #[async_trait]
    impl ContractReader for EmptyContractReader {
        async fn list_contracts(&self) -> Result<Vec<Contract>, ContractReadError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_reader_is_object_safe() {
        let reader: Box<dyn ContractReader> = Box::new(EmptyContractReader);
        assert!(reader.list_contracts().await.unwrap().is_empty());
    }

    #[test]
    fn test_error_messages() {
        let error = ContractReadError::Unavailable("fixture file missing".to_string());
        assert_eq!(
            error.to_string(),
            "Contract table unavailable: fixture file missing"
        );
    }
}
