use super::error::VoiceServiceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ElevenLabs "Adam", a multilingual male voice
pub const ADAM_VOICE_ID: &str = "pNInz6obpgDQGcFyl2A0";
/// ElevenLabs "Bella", a multilingual female voice
pub const BELLA_VOICE_ID: &str = "EXAVITQu4vr4xnSDxMaL";

/// Human-readable voice selector (language + gender)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceLabel {
    #[serde(rename = "English Male")]
    EnglishMale,
    #[serde(rename = "English Female")]
    EnglishFemale,
    #[serde(rename = "Urdu Male")]
    UrduMale,
    #[serde(rename = "Urdu Female")]
    UrduFemale,
    #[serde(rename = "Hindi Male")]
    HindiMale,
    #[serde(rename = "Hindi Female")]
    HindiFemale,
    #[serde(rename = "Spanish Male")]
    SpanishMale,
    #[serde(rename = "Spanish Female")]
    SpanishFemale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl VoiceLabel {
    pub const ALL: [VoiceLabel; 8] = [
        VoiceLabel::EnglishMale,
        VoiceLabel::EnglishFemale,
        VoiceLabel::UrduMale,
        VoiceLabel::UrduFemale,
        VoiceLabel::HindiMale,
        VoiceLabel::HindiFemale,
        VoiceLabel::SpanishMale,
        VoiceLabel::SpanishFemale,
    ];

    /// Label as shown in the voice select control
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceLabel::EnglishMale => "English Male",
            VoiceLabel::EnglishFemale => "English Female",
            VoiceLabel::UrduMale => "Urdu Male",
            VoiceLabel::UrduFemale => "Urdu Female",
            VoiceLabel::HindiMale => "Hindi Male",
            VoiceLabel::HindiFemale => "Hindi Female",
            VoiceLabel::SpanishMale => "Spanish Male",
            VoiceLabel::SpanishFemale => "Spanish Female",
        }
    }

    pub fn language(&self) -> &'static str {
        match self {
            VoiceLabel::EnglishMale | VoiceLabel::EnglishFemale => "English",
            VoiceLabel::UrduMale | VoiceLabel::UrduFemale => "Urdu",
            VoiceLabel::HindiMale | VoiceLabel::HindiFemale => "Hindi",
            VoiceLabel::SpanishMale | VoiceLabel::SpanishFemale => "Spanish",
        }
    }

    pub fn gender(&self) -> Gender {
        match self {
            VoiceLabel::EnglishMale
            | VoiceLabel::UrduMale
            | VoiceLabel::HindiMale
            | VoiceLabel::SpanishMale => Gender::Male,
            _ => Gender::Female,
        }
    }

    /// Provider voice identifier for this label.
    ///
    /// The multilingual model speaks every language with the same voice,
    /// so all labels collapse onto one male and one female voice.
    pub fn voice_id(&self) -> &'static str {
        match self.gender() {
            Gender::Male => ADAM_VOICE_ID,
            Gender::Female => BELLA_VOICE_ID,
        }
    }
}

impl std::fmt::Display for VoiceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VoiceLabel {
    type Err = VoiceServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoiceLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| VoiceServiceError::UnknownVoice(s.to_string()))
    }
}

/// Resolve a voice label to the provider voice identifier
pub fn resolve_voice_id(label: &str) -> Result<&'static str, VoiceServiceError> {
    label.parse::<VoiceLabel>().map(|l| l.voice_id())
}
