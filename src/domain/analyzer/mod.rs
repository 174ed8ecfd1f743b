//! Analyzer Module - Stub contract analysis.
//!
//! Uploaded documents are classified by extension only; the analysis itself
//! is a constant result.

mod document;
mod result;

pub use document::{DocumentKind, UploadedDocument};
pub use result::{ContractSummary, FixedAnalysisResult, RecommendedAction, RevenueLine};
