use axum::body::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// File name used when the recorded audio is saved
pub const DOWNLOAD_FILENAME: &str = "Azan_World_Voice.mp3";

/// Locally addressable reference to generated audio.
///
/// Cloning shares the underlying bytes. The audio is released once the last
/// clone is dropped, which happens when a session records a newer result,
/// fails, or is evicted.
#[derive(Debug, Clone)]
pub struct AudioHandle {
    pub id: Uuid,
    /// Request generation that produced this audio
    pub generation: u64,
    pub audio: Bytes,
    pub content_type: String,
    /// Characters sent for synthesis, greeting included
    pub character_count: usize,
    pub created_at: DateTime<Utc>,
}

impl AudioHandle {
    pub fn new(generation: u64, audio: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            generation,
            audio: audio.into(),
            content_type: content_type.into(),
            character_count: 0,
            created_at: Utc::now(),
        }
    }

    pub fn with_character_count(mut self, character_count: usize) -> Self {
        self.character_count = character_count;
        self
    }

    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}
