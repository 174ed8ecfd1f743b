//! Contract table adapters.

mod in_memory;

pub use in_memory::{ContractLoadError, InMemoryContractReader};
