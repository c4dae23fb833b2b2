use serde_json::json;

use crate::{
    error::Result,
    models::{merge_extra, ImageGeneration, ImageGenerationRequest},
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct ImagesClient {
    transport: Transport,
}

impl ImagesClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGeneration> {
        log::info!("Generating {} image(s) with model: {}", request.n, request.model);

        let mut payload = serde_json::to_value(&request)?;
        payload["category"] = json!("image");
        let payload = merge_extra(payload, &request.extra);

        self.transport.post("/inference", &payload).await
    }
}
