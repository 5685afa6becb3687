use super::handle::AudioHandle;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const LOADING_MESSAGE: &str = "Generating voice... Please wait.";
pub const SUCCESS_MESSAGE: &str = "Voice generated successfully!";

/// State of one voice generator page
#[derive(Debug, Clone, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading {
        generation: u64,
    },
    Succeeded(AudioHandle),
    /// `handle` survives input rejections; provider failures clear it
    Failed {
        message: String,
        handle: Option<AudioHandle>,
    },
}

/// Everything that can move a session between states
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A request was sent to the provider
    Submitted { generation: u64 },
    /// Input refused before any network call
    Rejected(String),
    Completed { generation: u64, handle: AudioHandle },
    Failed { generation: u64, message: String },
    /// Download asked for while nothing is recorded
    DownloadMissing(String),
}

/// Advance `state` by `event`.
///
/// Provider outcomes only land while the session is still loading the same
/// generation; anything else belongs to a superseded request and is dropped.
/// Rejections never interrupt a request in flight and keep whatever audio
/// is already recorded.
pub fn transition(state: &UiState, event: UiEvent) -> UiState {
    match (state, event) {
        (_, UiEvent::Submitted { generation }) => UiState::Loading { generation },
        (UiState::Loading { .. }, UiEvent::Rejected(_) | UiEvent::DownloadMissing(_)) => {
            state.clone()
        }
        (_, UiEvent::Rejected(message) | UiEvent::DownloadMissing(message)) => UiState::Failed {
            message,
            handle: state.handle().cloned(),
        },
        (UiState::Loading { generation: current }, UiEvent::Completed { generation, handle })
            if *current == generation =>
        {
            UiState::Succeeded(handle)
        }
        (UiState::Loading { generation: current }, UiEvent::Failed { generation, message })
            if *current == generation =>
        {
            UiState::Failed {
                message,
                handle: None,
            }
        }
        (_, UiEvent::Completed { .. } | UiEvent::Failed { .. }) => state.clone(),
    }
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    /// The handle available for playback and download, if any
    pub fn handle(&self) -> Option<&AudioHandle> {
        match self {
            UiState::Succeeded(handle) => Some(handle),
            UiState::Failed { handle, .. } => handle.as_ref(),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading { .. } => "loading",
            UiState::Succeeded(_) => "succeeded",
            UiState::Failed { .. } => "failed",
        }
    }

    pub fn render(&self) -> StatusView {
        let (kind, message) = match self {
            UiState::Idle => (StatusKind::Info, String::new()),
            UiState::Loading { .. } => (StatusKind::Info, LOADING_MESSAGE.to_string()),
            UiState::Succeeded(_) => (StatusKind::Success, SUCCESS_MESSAGE.to_string()),
            UiState::Failed { message, .. } => (StatusKind::Error, message.clone()),
        };

        StatusView {
            state: self.name(),
            status: StatusLine { kind, message },
            controls_enabled: !self.is_loading(),
            download_enabled: self.handle().is_some(),
            handle_id: self.handle().map(|h| h.id),
            generated_at: self.handle().map(|h| h.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

/// Presentation of a [`UiState`] for the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    pub state: &'static str,
    pub status: StatusLine,
    pub controls_enabled: bool,
    pub download_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}
