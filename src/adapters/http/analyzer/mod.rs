//! Contract analyzer HTTP adapter module.
//!
//! Accepts a multipart upload and answers with the fixed analysis.

pub mod handlers;
pub mod routes;

pub use handlers::{AnalyzerApiError, AnalyzerAppState};
pub use routes::analyzer_routes;
