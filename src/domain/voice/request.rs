use serde::Serialize;

/// Spoken before every user text
pub const GREETING: &str = "Welcome to the Ultimate World of Azan. ";
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.5,
        }
    }
}

/// One synthesis call. Serializes to the provider's request body; the
/// voice id travels in the URL path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    #[serde(skip)]
    pub voice_id: String,
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}

impl GenerationRequest {
    /// Build the request for already trimmed user text
    pub fn compose(user_text: &str, voice_id: &str, model_id: &str) -> Self {
        Self {
            voice_id: voice_id.to_string(),
            text: format!("{}{}", GREETING, user_text),
            model_id: model_id.to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
