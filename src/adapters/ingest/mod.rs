//! Contract ingestor adapters.

mod fixed;

pub use fixed::FixedContractIngestor;
