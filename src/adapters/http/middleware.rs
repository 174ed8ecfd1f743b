//! Cross-cutting HTTP layers: request ids, tracing, timeouts, CORS and
//! compression.

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ServerConfig};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps the API router in the service-wide middleware stack.
///
/// Outermost first: request id, CORS, request id propagation, tracing,
/// compression, timeout.
pub fn apply_middleware(router: Router, config: &AppConfig) -> Router {
    let mut router = router.layer(TimeoutLayer::new(config.server.request_timeout()));

    if config.features.enable_compression {
        router = router.layer(CompressionLayer::new());
    }

    if config.features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }));
    }

    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(cors_layer(&config.server))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Any origin unless `server.cors_origins` lists some.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
