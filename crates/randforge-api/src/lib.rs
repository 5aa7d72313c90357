//! Randforge API — an Axum service exposing dice rolls and sampling over a
//! single shared engine.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the application router. Used by `main.rs` and the integration
/// tests so both share one route structure.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/dice", routes::dice::router())
        .nest("/api/v1/random", routes::random::router())
        .with_state(state)
}
