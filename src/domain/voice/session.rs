use super::ui_state::{transition, UiEvent, UiState};
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

pub const DEFAULT_SESSION_ID: &str = "default";

/// Server-side state of one voice generator page
pub struct VoiceSession {
    generation: AtomicU64,
    state: watch::Sender<UiState>,
}

impl Default for VoiceSession {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceSession {
    pub fn new() -> Self {
        let (state, _) = watch::channel(UiState::Idle);
        Self {
            generation: AtomicU64::new(0),
            state,
        }
    }

    pub fn current(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Watch state changes, e.g. to re-render the status line
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Start a new request. Any request still in flight becomes stale.
    pub fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.apply(UiEvent::Submitted { generation });
        generation
    }

    pub fn apply(&self, event: UiEvent) {
        self.state.send_modify(|state| *state = transition(state, event));
    }

    /// Apply the provider outcome of `generation`.
    ///
    /// Returns false when a newer request has started since, in which case the
    /// state is left untouched and subscribers are not notified.
    pub fn settle(&self, generation: u64, event: UiEvent) -> bool {
        self.state.send_if_modified(|state| {
            let current = matches!(state, UiState::Loading { generation: g } if *g == generation);
            if current {
                *state = transition(state, event);
            }
            current
        })
    }
}

/// In-memory sessions keyed by the page's session id.
///
/// Idle sessions are evicted, releasing whatever audio they still hold.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<String, Arc<VoiceSession>>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, idle_timeout: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(max_sessions)
                .time_to_idle(idle_timeout)
                .build(),
        }
    }

    pub async fn get(&self, session_id: &str) -> Arc<VoiceSession> {
        self.sessions
            .get_with(session_id.to_string(), async { Arc::new(VoiceSession::new()) })
            .await
    }
}
