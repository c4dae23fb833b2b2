use serde::{Deserialize, Serialize};

use super::common::null_default;

#[derive(Debug, Clone, Serialize)]
pub struct ProviderRegistration {
    pub name: String,
    pub hardware_type: String,
    pub compute_units: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ProviderRegistration {
    pub fn new(name: impl Into<String>, hardware_type: impl Into<String>, compute_units: u64) -> Self {
        Self {
            name: name.into(),
            hardware_type: hardware_type.into(),
            compute_units,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderRegistrationResult {
    #[serde(deserialize_with = "null_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_default")]
    pub provider_id: String,
    #[serde(deserialize_with = "null_default")]
    pub device_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EarningsDay {
    #[serde(deserialize_with = "null_default")]
    pub date: String,
    #[serde(deserialize_with = "null_default")]
    pub earned_usd: f64,
    #[serde(deserialize_with = "null_default")]
    pub requests_served: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderEarnings {
    #[serde(deserialize_with = "null_default")]
    pub total_earned_usd: f64,
    #[serde(deserialize_with = "null_default")]
    pub pending_usd: f64,
    #[serde(deserialize_with = "null_default")]
    pub paid_usd: f64,
    #[serde(deserialize_with = "null_default")]
    pub daily: Vec<EarningsDay>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HardwareRentalRequest {
    pub gpu_type: String,
    pub gpu_count: u32,
    pub duration_hours: u32,
}

impl HardwareRentalRequest {
    pub fn new(gpu_type: impl Into<String>) -> Self {
        Self {
            gpu_type: gpu_type.into(),
            gpu_count: 1,
            duration_hours: 1,
        }
    }

    pub fn with_gpu_count(mut self, gpu_count: u32) -> Self {
        self.gpu_count = gpu_count;
        self
    }

    pub fn with_duration_hours(mut self, hours: u32) -> Self {
        self.duration_hours = hours;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HardwareRental {
    #[serde(deserialize_with = "null_default")]
    pub rental_id: String,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub gpu_type: String,
    #[serde(deserialize_with = "null_default")]
    pub gpu_count: u32,
    #[serde(deserialize_with = "null_default")]
    pub duration_hours: u32,
    #[serde(deserialize_with = "null_default")]
    pub total_cost_usd: f64,
    #[serde(deserialize_with = "null_default")]
    pub started_at: String,
    #[serde(deserialize_with = "null_default")]
    pub expires_at: String,
}
