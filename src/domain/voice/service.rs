use super::catalog::{resolve_voice_id, VoiceLabel};
use super::dto::VoiceOption;
use super::error::{VoiceServiceError, NO_CONTENT_MESSAGE};
use super::handle::AudioHandle;
use super::request::GenerationRequest;
use super::session::{SessionStore, VoiceSession};
use super::ui_state::{StatusView, UiEvent};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct VoiceService {
    tts_repo: Arc<dyn TtsRepository>,
    sessions: SessionStore,
    model_id: String,
}

impl VoiceService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, sessions: SessionStore, model_id: String) -> Self {
        Self {
            tts_repo,
            sessions,
            model_id,
        }
    }
}

#[async_trait]
pub trait VoiceServiceApi: Send + Sync {
    /// Generate a voice clip for `text` spoken by `voice_label`
    ///
    /// This operation:
    /// - Rejects blank text and unknown labels without calling the provider
    /// - Prefixes the greeting and calls the provider exactly once
    /// - Records the audio for download unless a newer request has started
    async fn generate(
        &self,
        session_id: &str,
        text: &str,
        voice_label: &str,
    ) -> Result<AudioHandle, VoiceServiceError>;

    /// The recorded audio of the last successful generation
    async fn download(&self, session_id: &str) -> Result<AudioHandle, VoiceServiceError>;

    /// Look up the recorded audio by handle id, for playback
    async fn audio(
        &self,
        session_id: &str,
        handle_id: Uuid,
    ) -> Result<AudioHandle, VoiceServiceError>;

    async fn status(&self, session_id: &str) -> StatusView;

    fn voices(&self) -> Vec<VoiceOption>;
}

#[async_trait]
impl VoiceServiceApi for VoiceService {
    async fn generate(
        &self,
        session_id: &str,
        text: &str,
        voice_label: &str,
    ) -> Result<AudioHandle, VoiceServiceError> {
        let session = self.sessions.get(session_id).await;

        let text = text.trim();
        if text.is_empty() {
            return Err(Self::reject(&session, VoiceServiceError::empty_text()));
        }

        let voice_id = resolve_voice_id(voice_label).map_err(|e| Self::reject(&session, e))?;

        let generation = session.begin();
        let request = GenerationRequest::compose(text, voice_id, &self.model_id);

        tracing::info!(
            session_id = %session_id,
            generation,
            voice_label = %voice_label,
            voice_id = %voice_id,
            text_length = request.char_count(),
            "Voice generation request"
        );

        match self.tts_repo.synthesize(&request).await {
            Ok(synthesized) => {
                let handle =
                    AudioHandle::new(generation, synthesized.audio, synthesized.content_type)
                        .with_character_count(request.char_count());
                let applied = session.settle(
                    generation,
                    UiEvent::Completed {
                        generation,
                        handle: handle.clone(),
                    },
                );
                if !applied {
                    tracing::info!(session_id = %session_id, generation, "Discarding superseded voice");
                    return Err(VoiceServiceError::Superseded);
                }

                tracing::info!(
                    session_id = %session_id,
                    generation,
                    handle_id = %handle.id,
                    audio_size = handle.len(),
                    created_at = %handle.created_at,
                    "Voice generated"
                );
                Ok(handle)
            }
            Err(e) => {
                let err = VoiceServiceError::from(e);
                let applied = session.settle(
                    generation,
                    UiEvent::Failed {
                        generation,
                        message: format!("Error: {}", err),
                    },
                );
                if !applied {
                    tracing::warn!(session_id = %session_id, generation, error = %err, "Discarding superseded failure");
                    return Err(VoiceServiceError::Superseded);
                }

                tracing::error!(session_id = %session_id, generation, error = %err, "Error generating voice");
                Err(err)
            }
        }
    }

    async fn download(&self, session_id: &str) -> Result<AudioHandle, VoiceServiceError> {
        let session = self.sessions.get(session_id).await;
        let recorded = session.current().handle().cloned();

        recorded.ok_or_else(|| {
            session.apply(UiEvent::DownloadMissing(NO_CONTENT_MESSAGE.to_string()));
            VoiceServiceError::NoContent
        })
    }

    async fn audio(
        &self,
        session_id: &str,
        handle_id: Uuid,
    ) -> Result<AudioHandle, VoiceServiceError> {
        let session = self.sessions.get(session_id).await;
        let recorded = session.current().handle().cloned();

        recorded
            .filter(|h| h.id == handle_id)
            .ok_or(VoiceServiceError::HandleNotFound(handle_id))
    }

    async fn status(&self, session_id: &str) -> StatusView {
        self.sessions.get(session_id).await.current().render()
    }

    fn voices(&self) -> Vec<VoiceOption> {
        VoiceLabel::ALL.into_iter().map(VoiceOption::from).collect()
    }
}

impl VoiceService {
    fn reject(session: &VoiceSession, err: VoiceServiceError) -> VoiceServiceError {
        tracing::warn!(error = %err, "Voice request rejected");
        session.apply(UiEvent::Rejected(err.to_string()));
        err
    }
}
