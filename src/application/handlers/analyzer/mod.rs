//! Contract analysis handlers.

mod analyze_contract;

pub use analyze_contract::{AnalyzeContractCommand, AnalyzeContractHandler, AnalyzeContractResult};
