use crate::domain::voice::DEFAULT_MODEL_ID;
use crate::infrastructure::repositories::ELEVENLABS_BASE_URL;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // ElevenLabs
    pub elevenlabs_api_key: ApiKey,
    pub elevenlabs_base_url: String,
    pub elevenlabs_model_id: String,
    // Sessions
    pub session_idle_minutes: u64,
    pub max_sessions: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Provider credential. Only ever read from the environment and never
/// printed, so it cannot leak through logs or `Debug` output.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let api_key = env::var("ELEVENLABS_API_KEY")
            .map_err(|_| "ELEVENLABS_API_KEY must be set")?;
        if api_key.trim().is_empty() {
            return Err("ELEVENLABS_API_KEY must not be empty".into());
        }

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            elevenlabs_api_key: ApiKey::new(api_key.trim()),
            elevenlabs_base_url: env::var("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|_| ELEVENLABS_BASE_URL.to_string()),
            elevenlabs_model_id: env::var("ELEVENLABS_MODEL_ID")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            max_sessions: env::var("MAX_SESSIONS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes.saturating_mul(60))
    }
}
