use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::common::{null_default, null_or, ExtraFields};
use crate::error::{ReGraphError, Result};

null_or!(format_or_mp3, String, "mp3".to_string());

#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub input: String,
    pub voice: String,
    pub response_format: String,
    pub speed: f32,
    #[serde(skip)]
    pub extra: ExtraFields,
}

impl Default for SpeechRequest {
    fn default() -> Self {
        Self {
            model: "tts-1".to_string(),
            input: String::new(),
            voice: "alloy".to_string(),
            response_format: "mp3".to_string(),
            speed: 1.0,
            extra: ExtraFields::new(),
        }
    }
}

impl SpeechRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.response_format = format.into();
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioSpeech {
    #[serde(deserialize_with = "null_default")]
    pub audio_base64: String,
    #[serde(deserialize_with = "format_or_mp3")]
    pub format: String,
}

impl Default for AudioSpeech {
    fn default() -> Self {
        Self {
            audio_base64: String::new(),
            format: "mp3".to_string(),
        }
    }
}

impl AudioSpeech {
    pub fn decode_audio(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.audio_base64)
            .map_err(|e| ReGraphError::Decode(format!("Invalid audio payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_speech_defaults() {
        let payload = serde_json::to_value(SpeechRequest::new("Hello")).unwrap();
        assert_eq!(payload["model"], "tts-1");
        assert_eq!(payload["voice"], "alloy");
        assert_eq!(payload["response_format"], "mp3");
        assert_eq!(payload["speed"], 1.0);
        assert_eq!(payload["input"], "Hello");
    }

    #[test]
    fn test_audio_decode() {
        let speech: AudioSpeech = serde_json::from_value(json!({"audio_base64": "SUQz"})).unwrap();
        assert_eq!(speech.format, "mp3");
        assert_eq!(speech.decode_audio().unwrap(), b"ID3".to_vec());
    }

    #[test]
    fn test_explicit_nulls() {
        let speech: AudioSpeech =
            serde_json::from_value(json!({"audio_base64": null, "format": null})).unwrap();
        assert_eq!(speech, AudioSpeech::default());
        assert_eq!(speech.format, "mp3");
        assert!(speech.decode_audio().unwrap().is_empty());
    }
}
