use serde::{Deserialize, Serialize};

use super::common::{null_default, null_or, ExtraFields, Usage};

null_or!(object_or_embedding, String, "embedding".to_string());
null_or!(object_or_list, String, "list".to_string());

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Text(String),
    Batch(Vec<String>),
}

impl From<&str> for EmbeddingInput {
    fn from(text: &str) -> Self {
        EmbeddingInput::Text(text.to_string())
    }
}

impl From<String> for EmbeddingInput {
    fn from(text: String) -> Self {
        EmbeddingInput::Text(text)
    }
}

impl From<Vec<String>> for EmbeddingInput {
    fn from(texts: Vec<String>) -> Self {
        EmbeddingInput::Batch(texts)
    }
}

impl From<Vec<&str>> for EmbeddingInput {
    fn from(texts: Vec<&str>) -> Self {
        EmbeddingInput::Batch(texts.into_iter().map(String::from).collect())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest {
    pub model: String,
    pub input: EmbeddingInput,
    #[serde(skip)]
    pub extra: ExtraFields,
}

impl EmbeddingRequest {
    pub fn new(model: impl Into<String>, input: impl Into<EmbeddingInput>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            extra: ExtraFields::new(),
        }
    }

    pub fn extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmbeddingData {
    #[serde(deserialize_with = "object_or_embedding")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub index: u32,
    #[serde(deserialize_with = "null_default")]
    pub embedding: Vec<f32>,
}

impl Default for EmbeddingData {
    fn default() -> Self {
        Self {
            object: "embedding".to_string(),
            index: 0,
            embedding: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Embedding {
    #[serde(deserialize_with = "object_or_list")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub model: String,
    #[serde(deserialize_with = "null_default")]
    pub data: Vec<EmbeddingData>,
    #[serde(deserialize_with = "null_default")]
    pub usage: Usage,
}

impl Default for Embedding {
    fn default() -> Self {
        Self {
            object: "list".to_string(),
            model: String::new(),
            data: Vec::new(),
            usage: Usage::default(),
        }
    }
}

impl Embedding {
    pub fn vectors(&self) -> impl Iterator<Item = &[f32]> {
        self.data.iter().map(|d| d.embedding.as_slice())
    }
}
