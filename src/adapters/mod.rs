//! Adapters - Implementations of port interfaces.
//!
//! - `contracts` - in-memory contract table, optionally loaded from YAML
//! - `ingest` - upload ingestor returning the fixed analysis
//! - `http` - axum routers and middleware

pub mod contracts;
pub mod http;
pub mod ingest;

pub use contracts::{ContractLoadError, InMemoryContractReader};
pub use ingest::FixedContractIngestor;
