//! A small HTTP service answering a greeting, a version string and a
//! plain-text status from fixed strings, plus JSON health and info probes.
//!
//! The binary in `main.rs` only wires configuration, logging and the
//! listener; everything reachable over HTTP is built by [`router`].

pub mod config;
mod handlers;
pub mod logger;
pub mod models;
mod routes;
mod state;

pub use self::config::{Config, ConfigError};
pub use self::models::{Responses, Variant};
pub use self::routes::router;
pub use self::state::AppState;

/// Build the complete application from configuration.
pub fn app(config: &Config) -> axum::Router {
    router(AppState::new(config.variant))
}
