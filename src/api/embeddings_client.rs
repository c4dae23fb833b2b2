use serde_json::json;

use crate::{
    error::Result,
    models::{merge_extra, Embedding, EmbeddingRequest},
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct EmbeddingsClient {
    transport: Transport,
}

impl EmbeddingsClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, request: EmbeddingRequest) -> Result<Embedding> {
        log::info!("Generating embeddings with model: {}", request.model);

        let mut payload = serde_json::to_value(&request)?;
        payload["category"] = json!("embeddings");
        let payload = merge_extra(payload, &request.extra);

        self.transport.post("/inference", &payload).await
    }
}
