use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use azan_voice::controllers::voice::VoiceController;
use azan_voice::domain::voice::{SessionStore, VoiceService};
use azan_voice::infrastructure::config::{Config, LogFormat};
use azan_voice::infrastructure::http::start_http_server;
use azan_voice::infrastructure::repositories::ElevenLabsTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Azan Voice on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        base_url = %config.elevenlabs_base_url,
        model = %config.elevenlabs_model_id,
        session_idle_minutes = config.session_idle_minutes,
        max_sessions = config.max_sessions,
        "ElevenLabs configuration loaded"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let tts_repo = Arc::new(ElevenLabsTtsRepository::new(
        config.elevenlabs_base_url.clone(),
        config.elevenlabs_api_key.clone(),
    ));
    let sessions = SessionStore::new(config.max_sessions, config.session_idle_timeout());
    let voice_service = Arc::new(VoiceService::new(
        tts_repo,
        sessions,
        config.elevenlabs_model_id.clone(),
    ));
    let voice_controller = Arc::new(VoiceController::new(voice_service));

    start_http_server(config, voice_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "azan_voice=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
