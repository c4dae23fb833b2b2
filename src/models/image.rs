use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::common::{null_default, ExtraFields};
use crate::error::{ReGraphError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
    pub quality: String,
    pub style: String,
    #[serde(skip)]
    pub extra: ExtraFields,
}

impl Default for ImageGenerationRequest {
    fn default() -> Self {
        Self {
            model: "dall-e-3".to_string(),
            prompt: String::new(),
            n: 1,
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            style: "natural".to_string(),
            extra: ExtraFields::new(),
        }
    }
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_count(mut self, n: u32) -> Self {
        self.n = n;
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// One generated image; the server fills either `url` or `b64_json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
    pub revised_prompt: Option<String>,
}

impl ImageData {
    pub fn decode_b64(&self) -> Result<Option<Vec<u8>>> {
        self.b64_json
            .as_deref()
            .map(|data| {
                STANDARD
                    .decode(data)
                    .map_err(|e| ReGraphError::Decode(format!("Invalid image payload: {}", e)))
            })
            .transpose()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageGeneration {
    #[serde(deserialize_with = "null_default")]
    pub created: i64,
    #[serde(deserialize_with = "null_default")]
    pub data: Vec<ImageData>,
}
