pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, voice::VoiceController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes and layers configured
pub fn build_router(config: &Config, voice_controller: Arc<VoiceController>) -> Router {
    let voice_routes = Router::new()
        .route("/api/voices", get(VoiceController::list_voices))
        .route("/api/voice/generate", post(VoiceController::generate))
        .route("/api/voice/audio/:handle_id", get(VoiceController::audio))
        .route("/api/voice/download", get(VoiceController::download))
        .route("/api/voice/status", get(VoiceController::status))
        .with_state(voice_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .merge(voice_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        );

    // The page may be served from another origin while developing
    if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    voice_controller: Arc<VoiceController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, voice_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
