use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{null_default, null_or};

null_or!(status_or_unknown, String, "unknown".to_string());

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Device {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub hardware_type: String,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub compute_units: u64,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DeviceList {
    #[serde(deserialize_with = "null_default")]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlatformStatus {
    #[serde(deserialize_with = "status_or_unknown")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub uptime_percentage: f64,
    #[serde(deserialize_with = "null_default")]
    pub active_providers: u64,
    #[serde(deserialize_with = "null_default")]
    pub total_compute_units: u64,
    #[serde(deserialize_with = "null_default")]
    pub avg_latency_ms: u64,
    #[serde(deserialize_with = "null_default")]
    pub services: HashMap<String, String>,
}

impl Default for PlatformStatus {
    fn default() -> Self {
        Self {
            status: "unknown".to_string(),
            uptime_percentage: 0.0,
            active_providers: 0,
            total_compute_units: 0,
            avg_latency_ms: 0,
            services: HashMap::new(),
        }
    }
}

impl PlatformStatus {
    pub fn is_operational(&self) -> bool {
        self.status == "operational"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_defaults() {
        let status: PlatformStatus = serde_json::from_value(json!({})).unwrap();
        assert_eq!(status.status, "unknown");
        assert!(status.services.is_empty());
        assert!(!status.is_operational());
    }

    #[test]
    fn test_device_list() {
        let list: DeviceList = serde_json::from_value(json!({
            "devices": [{"id": "d-1", "name": "rig", "hardware_type": "gpu", "status": "online", "compute_units": 4}],
            "total": 1
        }))
        .unwrap();
        assert_eq!(list.devices[0].compute_units, 4);
        assert_eq!(list.devices[0].location, None);
    }

    #[test]
    fn test_explicit_nulls() {
        let device: Device = serde_json::from_value(json!({
            "id": "dev-1",
            "name": null,
            "hardware_type": null,
            "status": null,
            "compute_units": null,
            "location": null
        }))
        .unwrap();
        assert_eq!(device.id, "dev-1");
        assert_eq!(device.name, "");
        assert_eq!(device.compute_units, 0);
        assert_eq!(device.location, None);

        let status: PlatformStatus = serde_json::from_value(json!({
            "status": null,
            "uptime_percentage": null,
            "active_providers": 3,
            "services": null
        }))
        .unwrap();
        assert_eq!(status.status, "unknown");
        assert!(!status.is_operational());
        assert_eq!(status.uptime_percentage, 0.0);
        assert_eq!(status.active_providers, 3);
        assert!(status.services.is_empty());
    }
}
