//! Randforge API server entry point.

use std::net::SocketAddr;

use randforge_api::config::ServiceConfig;
use randforge_api::error::AppError;
use randforge_api::state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Randforge API server");

    // Read configuration from the optional YAML file and environment.
    let config = ServiceConfig::from_env()?;
    tracing::info!(engine = %config.engine.kind, seeded = config.engine.seed.is_some(), "engine configured");

    // Build application state.
    let app_state = AppState::new(config.engine.build());

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = randforge_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
