//! HTTP routes for the contract analyzer.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use super::handlers::{analyze_contract, AnalyzerAppState};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Creates the analyzer router.
///
/// Bodies are capped slightly above `max_upload_bytes` so the ingestor can
/// report the exact file size for anything near the limit.
pub fn analyzer_routes(state: AnalyzerAppState, max_upload_bytes: usize) -> Router {
    Router::new()
        // POST /api/contracts/analyze (multipart, field "file")
        .route("/api/contracts/analyze", post(analyze_contract))
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        ))
        .with_state(state)
}
