use crate::domain::voice::GenerationRequest;
use async_trait::async_trait;

/// Audio returned by a provider
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub audio: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TtsProviderError {
    /// Non-success status; `message` is what the user should see
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider so the voice service can be driven
/// by ElevenLabs in production and by in-memory fakes in tests.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Issue exactly one synthesis call for `request`
    ///
    /// # Errors
    /// `Api` when the provider rejects the request, `Transport` when it
    /// cannot be reached or its body cannot be read
    async fn synthesize(
        &self,
        request: &GenerationRequest,
    ) -> Result<SynthesizedAudio, TtsProviderError>;
}
