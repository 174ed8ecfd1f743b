//! HTTP routes for the revenue simulator.

use axum::routing::post;
use axum::Router;

use super::handlers::run_simulation;

/// Creates the revenue router.
pub fn revenue_routes() -> Router {
    Router::new()
        // POST /api/revenue/simulations
        .route("/api/revenue/simulations", post(run_simulation))
}
