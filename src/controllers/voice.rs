use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::voice::{
        dto::{GenerateVoiceRequest, VoiceOption},
        AudioHandle, StatusView, VoiceLabel, VoiceService, VoiceServiceApi, DEFAULT_SESSION_ID,
        DOWNLOAD_FILENAME,
    },
    error::{AppError, AppResult},
};

/// Header selecting the page session
pub const X_SESSION_ID: &str = "x-session-id";
pub const X_AUDIO_HANDLE: &str = "x-audio-handle";
const MAX_SESSION_ID_LEN: usize = 128;

pub struct VoiceController {
    voice_service: Arc<VoiceService>,
}

impl VoiceController {
    pub fn new(voice_service: Arc<VoiceService>) -> Self {
        Self { voice_service }
    }

    /// GET /api/voices - Labels for the voice select control
    pub async fn list_voices(
        State(controller): State<Arc<VoiceController>>,
    ) -> Json<Vec<VoiceOption>> {
        Json(controller.voice_service.voices())
    }

    /// POST /api/voice/generate - Generate a clip and return it for playback
    pub async fn generate(
        State(controller): State<Arc<VoiceController>>,
        headers: HeaderMap,
        Json(request): Json<GenerateVoiceRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let session_id = session_id(&headers)?;

        let handle = controller
            .voice_service
            .generate(&session_id, &request.text, &request.voice)
            .await?;

        let mut response_headers = audio_headers(&handle)?;
        response_headers.insert(
            "x-character-count",
            HeaderValue::from(handle.character_count),
        );
        if let Ok(label) = request.voice.parse::<VoiceLabel>() {
            response_headers.insert("x-voice-id", HeaderValue::from_static(label.voice_id()));
        }

        Ok((StatusCode::OK, response_headers, Body::from(handle.audio)))
    }

    /// GET /api/voice/audio/:handle_id - Replay the recorded clip
    pub async fn audio(
        State(controller): State<Arc<VoiceController>>,
        headers: HeaderMap,
        Path(handle_id): Path<Uuid>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let session_id = session_id(&headers)?;
        let handle = controller.voice_service.audio(&session_id, handle_id).await?;

        Ok((StatusCode::OK, audio_headers(&handle)?, Body::from(handle.audio)))
    }

    /// GET /api/voice/download - Save the recorded clip as a file
    pub async fn download(
        State(controller): State<Arc<VoiceController>>,
        headers: HeaderMap,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let session_id = session_id(&headers)?;
        let handle = controller.voice_service.download(&session_id).await?;

        tracing::info!(
            session_id = %session_id,
            handle_id = %handle.id,
            audio_size = handle.len(),
            generated_at = %handle.created_at,
            "Voice download"
        );

        let mut response_headers = audio_headers(&handle)?;
        response_headers.insert(
            header::CONTENT_DISPOSITION,
            header_value(&format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME))?,
        );

        Ok((StatusCode::OK, response_headers, Body::from(handle.audio)))
    }

    /// GET /api/voice/status - Rendered status line and control state
    pub async fn status(
        State(controller): State<Arc<VoiceController>>,
        headers: HeaderMap,
    ) -> AppResult<Json<StatusView>> {
        let session_id = session_id(&headers)?;
        Ok(Json(controller.voice_service.status(&session_id).await))
    }
}

fn session_id(headers: &HeaderMap) -> AppResult<String> {
    let Some(value) = headers.get(X_SESSION_ID) else {
        return Ok(DEFAULT_SESSION_ID.to_string());
    };

    let id = value
        .to_str()
        .map(str::trim)
        .map_err(|_| AppError::BadRequest("Invalid session id".to_string()))?;

    if id.is_empty() || id.len() > MAX_SESSION_ID_LEN {
        return Err(AppError::BadRequest("Invalid session id".to_string()));
    }

    Ok(id.to_string())
}

fn audio_headers(handle: &AudioHandle) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, header_value(&handle.content_type)?);
    headers.insert(X_AUDIO_HANDLE, header_value(&handle.id.to_string())?);
    Ok(headers)
}

fn header_value(value: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| AppError::Internal(format!("invalid header value: {}", e)))
}
