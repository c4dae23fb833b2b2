use serde::{Deserialize, Serialize};

use super::common::null_default;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UsageDay {
    #[serde(deserialize_with = "null_default")]
    pub date: String,
    #[serde(deserialize_with = "null_default")]
    pub total_cost: f64,
    #[serde(deserialize_with = "null_default")]
    pub total_tokens: u64,
    #[serde(deserialize_with = "null_default")]
    pub request_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UsageStats {
    #[serde(deserialize_with = "null_default")]
    pub period_start: String,
    #[serde(deserialize_with = "null_default")]
    pub period_end: String,
    #[serde(deserialize_with = "null_default")]
    pub total_cost: f64,
    #[serde(deserialize_with = "null_default")]
    pub total_tokens: u64,
    #[serde(deserialize_with = "null_default")]
    pub total_requests: u64,
    #[serde(deserialize_with = "null_default")]
    pub daily: Vec<UsageDay>,
}

impl UsageStats {
    /// The day with the highest spend in the period.
    pub fn peak_day(&self) -> Option<&UsageDay> {
        self.daily
            .iter()
            .max_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
    }
}
