//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContractReader` - Source of the contract table
//! - `ContractIngestor` - Analysis of uploaded contract documents

mod contract_ingestor;
mod contract_reader;

pub use contract_ingestor::{ContractIngestor, IngestError};
pub use contract_reader::{ContractReadError, ContractReader};
