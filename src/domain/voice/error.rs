use crate::error::AppError;
use crate::infrastructure::repositories::TtsProviderError;
use uuid::Uuid;

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text.";
pub const NO_CONTENT_MESSAGE: &str = "No voice available to download.";

#[derive(Debug, thiserror::Error)]
pub enum VoiceServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("Unknown voice: {0}")]
    UnknownVoice(String),
    /// Provider answered with a non-success status
    #[error("{0}")]
    Api(String),
    /// Provider could not be reached or the body could not be read
    #[error("{0}")]
    Transport(String),
    #[error("{}", NO_CONTENT_MESSAGE)]
    NoContent,
    #[error("Audio {0} is no longer available")]
    HandleNotFound(Uuid),
    #[error("Superseded by a newer voice request")]
    Superseded,
}

impl VoiceServiceError {
    pub fn empty_text() -> Self {
        VoiceServiceError::Validation(EMPTY_TEXT_MESSAGE.to_string())
    }
}

impl From<TtsProviderError> for VoiceServiceError {
    fn from(err: TtsProviderError) -> Self {
        match err {
            TtsProviderError::Api { message, .. } => VoiceServiceError::Api(message),
            TtsProviderError::Transport(msg) => VoiceServiceError::Transport(msg),
        }
    }
}

impl From<VoiceServiceError> for AppError {
    fn from(err: VoiceServiceError) -> Self {
        match err {
            VoiceServiceError::Validation(_) | VoiceServiceError::UnknownVoice(_) => {
                AppError::BadRequest(err.to_string())
            }
            VoiceServiceError::NoContent | VoiceServiceError::HandleNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            VoiceServiceError::Superseded => AppError::Conflict(err.to_string()),
            VoiceServiceError::Api(msg) | VoiceServiceError::Transport(msg) => {
                AppError::ExternalService(msg)
            }
        }
    }
}
