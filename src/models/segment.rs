use serde::Serialize;
use serde_json::{Map, Value};

/// One speaker-attributed utterance of transcript text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Speaker identifier, without any `speaker_` prefix
    #[serde(rename = "speakerId")]
    pub speaker_id: String,
    /// Utterance text
    pub text: String,
    /// Fields carried over from a JSON transcript segment (e.g. `speaker_id`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Segment {
    pub fn new(speaker_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker_id: speaker_id.into(),
            text: text.into(),
            extra: Map::new(),
        }
    }
}
