//! Dashboard HTTP adapter module.
//!
//! Serves the home page overview.

use axum::routing::get;
use axum::{Json, Router};

use crate::application::handlers::{GetDashboardOverviewHandler, GetDashboardOverviewResult};

/// GET /api/dashboard
pub async fn get_dashboard_overview() -> Json<GetDashboardOverviewResult> {
    Json(GetDashboardOverviewHandler::new().handle())
}

/// Creates the dashboard router.
pub fn dashboard_routes() -> Router {
    Router::new().route("/api/dashboard", get(get_dashboard_overview))
}
