use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::null_default;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Model {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub category: String,
    #[serde(deserialize_with = "null_default")]
    pub provider: String,
    pub context_length: Option<u64>,
    pub price_per_1k_tokens: Option<f64>,
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelListMeta {
    #[serde(deserialize_with = "null_default")]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub providers: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub total_models: u64,
}

/// One page of the model catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelList {
    #[serde(deserialize_with = "null_default")]
    pub models: Vec<Model>,
    #[serde(deserialize_with = "null_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_default")]
    pub page: u32,
    #[serde(deserialize_with = "null_default")]
    pub limit: u32,
    #[serde(deserialize_with = "null_default")]
    pub total_pages: u32,
    #[serde(deserialize_with = "null_default")]
    pub meta: ModelListMeta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelListQuery {
    pub category: Option<String>,
    pub provider: Option<String>,
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for ModelListQuery {
    fn default() -> Self {
        Self {
            category: None,
            provider: None,
            search: None,
            page: 1,
            limit: 50,
        }
    }
}

impl ModelListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Empty filters are dropped; `page` and `limit` are always sent.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        let filters = [
            ("category", &self.category),
            ("provider", &self.provider),
            ("search", &self.search),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key.to_string(), value.to_string()));
            }
        }
        params.push(("page".to_string(), self.page.to_string()));
        params.push(("limit".to_string(), self.limit.to_string()));
        params
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelDeployRequest {
    pub model_name: String,
    pub base_model: String,
    pub model_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl ModelDeployRequest {
    pub fn new(model_name: impl Into<String>, base_model: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            base_model: base_model.into(),
            model_type: "lora".to_string(),
            weights_url: None,
            config: None,
        }
    }

    /// One of `lora`, `full` or `quantized`.
    pub fn with_model_type(mut self, model_type: impl Into<String>) -> Self {
        self.model_type = model_type.into();
        self
    }

    pub fn with_weights_url(mut self, url: impl Into<String>) -> Self {
        self.weights_url = Some(url.into());
        self
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelDeployment {
    #[serde(deserialize_with = "null_default")]
    pub deployment_id: String,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub model_name: String,
    #[serde(deserialize_with = "null_default")]
    pub base_model: String,
    #[serde(deserialize_with = "null_default")]
    pub estimated_time_minutes: u64,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn joined(params: &[(String, String)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[test]
    fn test_query_defaults() {
        assert_eq!(joined(&ModelListQuery::new().to_query()), "page=1&limit=50");
    }

    #[test]
    fn test_query_with_filters() {
        let query = ModelListQuery::new().category("llm").page(2).limit(10);
        assert_eq!(joined(&query.to_query()), "category=llm&page=2&limit=10");

        let query = ModelListQuery::new().provider("openai").search("");
        assert_eq!(joined(&query.to_query()), "provider=openai&page=1&limit=50");
    }

    #[test]
    fn test_deploy_payload() {
        let payload = serde_json::to_value(ModelDeployRequest::new("my-bot", "llama-3-8b")).unwrap();
        assert_eq!(
            payload,
            json!({"model_name": "my-bot", "base_model": "llama-3-8b", "model_type": "lora"})
        );
    }

    #[test]
    fn test_model_optional_fields() {
        let model: Model = serde_json::from_value(json!({
            "id": "claude-3-opus",
            "category": "llm",
            "provider": "anthropic",
            "context_length": 200000
        }))
        .unwrap();
        assert_eq!(model.context_length, Some(200000));
        assert_eq!(model.price_per_1k_tokens, None);
        assert_eq!(model.latency_ms, None);
    }

    #[test]
    fn test_explicit_nulls() {
        let list: ModelList = serde_json::from_value(json!({
            "models": [{"id": "gpt-5", "category": null, "provider": null, "context_length": null}],
            "total": null,
            "page": 1,
            "limit": null,
            "total_pages": null,
            "meta": {"categories": null, "providers": ["openai"], "total_models": null}
        }))
        .unwrap();
        assert_eq!(list.models[0].id, "gpt-5");
        assert_eq!(list.models[0].provider, "");
        assert_eq!(list.models[0].context_length, None);
        assert_eq!(list.total, 0);
        assert_eq!(list.page, 1);
        assert_eq!(list.meta.providers, vec!["openai".to_string()]);
        assert_eq!(list.meta.total_models, 0);

        let deployment: ModelDeployment = serde_json::from_value(json!({
            "deployment_id": "dep-1",
            "status": null,
            "estimated_time_minutes": null,
            "created_at": null
        }))
        .unwrap();
        assert_eq!(deployment.deployment_id, "dep-1");
        assert_eq!(deployment.estimated_time_minutes, 0);
        assert_eq!(deployment.created_at, "");
    }
}
