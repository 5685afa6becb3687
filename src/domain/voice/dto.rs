use super::catalog::{Gender, VoiceLabel};
use serde::{Deserialize, Serialize};

/// Request for POST /api/voice/generate
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateVoiceRequest {
    pub text: String,
    /// Voice label as listed by GET /api/voices
    pub voice: String,
}

/// Entry of GET /api/voices
#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceOption {
    pub label: VoiceLabel,
    pub language: String,
    pub gender: Gender,
}

impl From<VoiceLabel> for VoiceOption {
    fn from(label: VoiceLabel) -> Self {
        Self {
            label,
            language: label.language().to_string(),
            gender: label.gender(),
        }
    }
}
