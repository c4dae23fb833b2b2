use serde::{Deserialize, Serialize};

use super::common::{null_default, null_or};

null_or!(epochs_or_default, u32, TrainingConfig::default().epochs);
null_or!(learning_rate_or_default, f64, TrainingConfig::default().learning_rate);
null_or!(batch_size_or_default, u32, TrainingConfig::default().batch_size);
null_or!(lora_rank_or_default, u32, TrainingConfig::default().lora_rank);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrainingConfig {
    #[serde(deserialize_with = "epochs_or_default")]
    pub epochs: u32,
    #[serde(deserialize_with = "learning_rate_or_default")]
    pub learning_rate: f64,
    #[serde(deserialize_with = "batch_size_or_default")]
    pub batch_size: u32,
    #[serde(deserialize_with = "lora_rank_or_default")]
    pub lora_rank: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 3,
            learning_rate: 0.0001,
            batch_size: 4,
            lora_rank: 8,
        }
    }
}

impl TrainingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epochs(mut self, epochs: u32) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_lora_rank(mut self, lora_rank: u32) -> Self {
        self.lora_rank = lora_rank;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    Queued,
    Running,
    Completed,
    Failed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TrainingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TrainingStatus::Completed | TrainingStatus::Failed | TrainingStatus::Cancelled
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingJobRequest {
    pub model: String,
    pub dataset: String,
    /// Sent as `{}` when unset so the server applies its own defaults.
    #[serde(serialize_with = "config_or_empty")]
    pub config: Option<TrainingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl TrainingJobRequest {
    pub fn new(model: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            dataset: dataset.into(),
            config: None,
            callback_url: None,
        }
    }

    pub fn with_config(mut self, config: TrainingConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

fn config_or_empty<S>(config: &Option<TrainingConfig>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match config {
        Some(config) => config.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrainingJob {
    #[serde(deserialize_with = "null_default")]
    pub job_id: String,
    #[serde(deserialize_with = "null_default")]
    pub status: TrainingStatus,
    #[serde(deserialize_with = "null_default")]
    pub model: String,
    #[serde(deserialize_with = "null_default")]
    pub dataset: String,
    #[serde(deserialize_with = "null_default")]
    pub config: TrainingConfig,
    #[serde(deserialize_with = "null_default")]
    pub estimated_cost_usd: f64,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    pub progress: Option<f64>,
    pub eta_minutes: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TrainingJobList {
    #[serde(deserialize_with = "null_default")]
    pub jobs: Vec<TrainingJob>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CancelResult {
    #[serde(deserialize_with = "null_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_default")]
    pub message: String,
}
