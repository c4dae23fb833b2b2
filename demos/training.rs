use std::time::Duration;

use regraph::{logger, ClientConfig, ReGraphClient, TrainingConfig, TrainingJobRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;

    let dataset = std::env::args()
        .nth(1)
        .ok_or("usage: training <dataset-url>")?;

    let client = ReGraphClient::new(ClientConfig::from_dotenv())?;
    let jobs = client.training().jobs();

    let job = jobs
        .create(
            TrainingJobRequest::new("llama-3-8b", dataset)
                .with_config(TrainingConfig::new().with_epochs(2).with_lora_rank(16)),
        )
        .await?;
    log::info!(
        "🚀 Job {} queued, estimated cost ${:.2}",
        job.job_id,
        job.estimated_cost_usd
    );

    loop {
        let current = jobs.get(&job.job_id).await?;
        log::info!(
            "⏳ {:?} progress={:.0}% eta={}min",
            current.status,
            current.progress.unwrap_or(0.0) * 100.0,
            current.eta_minutes.unwrap_or(0)
        );
        if current.status.is_terminal() {
            break;
        }
        tokio::time::sleep(Duration::from_secs(30)).await;
    }

    Ok(())
}
