//! Leaderboard Web Server
//!
//! Axum-based server: the live WebSocket channel plus a small REST API.

pub mod broadcast;
pub mod channel;
pub mod routes;
pub mod state;
pub mod websocket;

use axum::{
    routing::{get, post},
    Router,
};
use leaderboard_core::{ScoreService, WriteOutcome};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use channel::LeaderboardChannel;
pub use state::{AppState, ServerConfig};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/scores", post(routes::scores::submit_scores))
        .route("/debug", get(routes::diagnostics::debug_info))
        .route("/kv-test", get(routes::diagnostics::kv_test))
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .route("/ws/leaderboard", get(websocket::ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Seed the store and run the web server.
pub async fn run_server(service: ScoreService, config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!(backend = service.backend(), "Initializing leaderboard scores");
    match service.initialize().await {
        WriteOutcome::Written => tracing::info!("Default scores written"),
        WriteOutcome::AlreadyPresent => tracing::info!("Existing scores kept"),
        WriteOutcome::Failed(e) => {
            tracing::warn!(error = %e, "Could not seed scores, continuing with defaults")
        }
    }

    let state = AppState::new(service, config.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("Web server listening on http://{}", config.addr());

    axum::serve(listener, app).await?;
    Ok(())
}
