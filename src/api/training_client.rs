use crate::{
    error::Result,
    models::{training::TrainingJobList, CancelResult, TrainingJob, TrainingJobRequest},
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct TrainingClient {
    jobs: JobsClient,
}

impl TrainingClient {
    pub fn new(transport: Transport) -> Self {
        Self {
            jobs: JobsClient::new(transport),
        }
    }

    pub fn jobs(&self) -> &JobsClient {
        &self.jobs
    }
}

#[derive(Debug, Clone)]
pub struct JobsClient {
    transport: Transport,
}

impl JobsClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, request: TrainingJobRequest) -> Result<TrainingJob> {
        log::info!(
            "Creating training job for {} on dataset {}",
            request.model,
            request.dataset
        );
        self.transport.post("/training/jobs", &request).await
    }

    pub async fn get(&self, job_id: &str) -> Result<TrainingJob> {
        self.transport
            .get(&format!("/training/jobs/{}", job_id), &[])
            .await
    }

    pub async fn list(&self) -> Result<Vec<TrainingJob>> {
        let list: TrainingJobList = self.transport.get("/training/jobs", &[]).await?;
        Ok(list.jobs)
    }

    pub async fn cancel(&self, job_id: &str) -> Result<CancelResult> {
        log::info!("Cancelling training job {}", job_id);
        self.transport
            .delete(&format!("/training/jobs/{}", job_id))
            .await
    }
}
