use crate::{
    error::Result,
    models::{ModelDeployRequest, ModelDeployment, ModelList, ModelListQuery},
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct ModelsClient {
    transport: Transport,
}

impl ModelsClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn list(&self, query: ModelListQuery) -> Result<ModelList> {
        let list: ModelList = self.transport.get("/models", &query.to_query()).await?;
        log::debug!(
            "Fetched {} models (page {} of {})",
            list.models.len(),
            list.page,
            list.total_pages
        );
        Ok(list)
    }

    pub async fn deploy(&self, request: ModelDeployRequest) -> Result<ModelDeployment> {
        log::info!(
            "Deploying {} model {} on top of {}",
            request.model_type,
            request.model_name,
            request.base_model
        );
        self.transport.post("/models/deploy", &request).await
    }
}
