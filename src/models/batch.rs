use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::null_default;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
}

impl BatchRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: 100,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchCreateRequest {
    pub requests: Vec<BatchRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl BatchCreateRequest {
    pub fn new(requests: Vec<BatchRequest>) -> Self {
        Self {
            requests,
            webhook_url: None,
        }
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BatchJob {
    #[serde(deserialize_with = "null_default")]
    pub batch_id: String,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub total_requests: u64,
    #[serde(deserialize_with = "null_default")]
    pub completed_requests: u64,
    #[serde(deserialize_with = "null_default")]
    pub failed_requests: u64,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    pub results: Option<Vec<Value>>,
}

impl BatchJob {
    pub fn pending_requests(&self) -> u64 {
        self.total_requests
            .saturating_sub(self.completed_requests.saturating_add(self.failed_requests))
    }
}
