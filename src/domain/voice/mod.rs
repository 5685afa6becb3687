pub mod catalog;
pub mod dto;
pub mod error;
pub mod handle;
pub mod request;
pub mod service;
pub mod session;
pub mod ui_state;

pub use catalog::{resolve_voice_id, VoiceLabel, ADAM_VOICE_ID, BELLA_VOICE_ID};
pub use error::VoiceServiceError;
pub use handle::{AudioHandle, DOWNLOAD_FILENAME};
pub use request::{GenerationRequest, DEFAULT_MODEL_ID, GREETING};
pub use service::{VoiceService, VoiceServiceApi};
pub use session::{SessionStore, VoiceSession, DEFAULT_SESSION_ID};
pub use ui_state::{StatusKind, StatusView, UiEvent, UiState};
