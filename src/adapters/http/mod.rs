//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`build_app`] merges them and applies the middleware stack.

pub mod analyzer;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod lifecycle;
pub mod middleware;
pub mod revenue;

use std::sync::Arc;

use axum::Router;

use crate::config::AppConfig;
use crate::ports::{ContractIngestor, ContractReader};

pub use analyzer::{analyzer_routes, AnalyzerAppState};
pub use dashboard::dashboard_routes;
pub use error::ErrorResponse;
pub use health::health_routes;
pub use lifecycle::{lifecycle_routes, LifecycleAppState};
pub use middleware::apply_middleware;
pub use revenue::revenue_routes;

/// Port implementations the HTTP layer is built over.
#[derive(Clone)]
pub struct HttpDependencies {
    pub contract_reader: Arc<dyn ContractReader>,
    pub ingestor: Arc<dyn ContractIngestor>,
}

/// All routes, without middleware.
pub fn api_router(deps: HttpDependencies, config: &AppConfig) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(dashboard_routes())
        .merge(revenue_routes())
        .merge(lifecycle_routes(LifecycleAppState::new(deps.contract_reader)))
        .merge(analyzer_routes(
            AnalyzerAppState::new(deps.ingestor),
            config.analyzer.max_upload_bytes,
        ))
}

/// The complete application: routes plus middleware.
pub fn build_app(config: &AppConfig, deps: HttpDependencies) -> Router {
    apply_middleware(api_router(deps, config), config)
}
