use axum::Json;
use axum::extract::State;

use crate::models::{AppInfo, HealthResponse, InfoResponse};
use crate::state::AppState;

pub async fn hello(State(state): State<AppState>) -> &'static str {

    state.variant.responses().greeting

}

pub async fn version(State(state): State<AppState>) -> &'static str {

    state.variant.responses().version

}

pub async fn health_simple(State(state): State<AppState>) -> &'static str {

    state.variant.responses().health

}

/// Liveness probe for load balancers and orchestrators.
pub async fn actuator_health() -> Json<HealthResponse> {

    Json(HealthResponse::up())

}

pub async fn actuator_info(State(state): State<AppState>) -> Json<InfoResponse> {

    Json(InfoResponse {
        app: AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            variant: state.variant,
        },
        started_at: state.started_at,
    })

}
