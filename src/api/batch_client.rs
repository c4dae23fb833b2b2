use crate::{
    error::Result,
    models::{BatchCreateRequest, BatchJob},
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct BatchClient {
    transport: Transport,
}

impl BatchClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, request: BatchCreateRequest) -> Result<BatchJob> {
        log::info!("Submitting batch of {} requests", request.requests.len());
        self.transport.post("/batch", &request).await
    }

    pub async fn get(&self, batch_id: &str) -> Result<BatchJob> {
        self.transport.get(&format!("/batch/{}", batch_id), &[]).await
    }
}
