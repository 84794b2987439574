use axum::Router;
use axum::http::Request;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
///
/// - `GET /` - greeting
/// - `GET /version` - version string
/// - `GET /health-simple` - plain-text status
/// - `GET /actuator/health` - JSON liveness probe
/// - `GET /actuator/info` - build and startup info
///
/// Anything else gets axum's default 404 (or 405 for a known path).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/version", get(handlers::version))
        .route("/health-simple", get(handlers::health_simple))
        .route("/actuator/health", get(handlers::actuator_health))
        .route("/actuator/info", get(handlers::actuator_info))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path()
                )
            }),
        )
        .with_state(state)
}
