use super::tts_repository::{SynthesizedAudio, TtsProviderError, TtsRepository};
use crate::domain::voice::GenerationRequest;
use crate::infrastructure::config::ApiKey;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;

pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";
const XI_API_KEY_HEADER: &str = "xi-api-key";
const AUDIO_MPEG: &str = "audio/mpeg";

/// Error body returned by ElevenLabs. `detail` is either a plain string or
/// an object such as `{"status": "voice_not_found", "message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl ElevenLabsTtsRepository {
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, voice_id)
    }

    /// Message shown to the user for a failed call
    fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|detail| match detail {
                Value::String(s) if !s.is_empty() => Some(s),
                Value::Object(map) => map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            });

        detail.unwrap_or_else(|| {
            format!(
                "API Error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
            .trim_end()
            .to_string()
        })
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(
        &self,
        request: &GenerationRequest,
    ) -> Result<SynthesizedAudio, TtsProviderError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            provider = "elevenlabs",
            voice_id = %request.voice_id,
            model = %request.model_id,
            text_length = request.char_count(),
            "Calling ElevenLabs TTS API"
        );

        let response = self
            .http_client
            .post(self.endpoint(&request.voice_id))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, AUDIO_MPEG)
            .header(XI_API_KEY_HEADER, self.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "ElevenLabs request failed");
                TtsProviderError::Transport(e.to_string())
            })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| v.starts_with("audio/"))
            .unwrap_or(AUDIO_MPEG)
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| TtsProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = Self::error_message(status, &body);
            tracing::warn!(
                provider = "elevenlabs",
                status = status.as_u16(),
                error = %message,
                "ElevenLabs rejected synthesis request"
            );
            return Err(TtsProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(
            provider = "elevenlabs",
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = body.len(),
            content_type = %content_type,
            "TTS synthesis completed"
        );

        Ok(SynthesizedAudio {
            audio: body.to_vec(),
            content_type,
        })
    }
}
