use regraph::{
    logger::{self, LoggerConfig},
    ChatCompletionRequest, ClientConfig, EmbeddingRequest, Message, ModelListQuery, ReGraphClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(LoggerConfig::development())?;

    let client = ReGraphClient::new(ClientConfig::from_dotenv())?;

    let status = client.status().get().await?;
    log::info!(
        "✅ Platform {} ({} providers, {:.2}% uptime)",
        status.status,
        status.active_providers,
        status.uptime_percentage
    );

    let models = client
        .models()
        .list(ModelListQuery::new().category("llm").limit(5))
        .await?;
    log::info!("📚 First {} of {} language models:", models.models.len(), models.total);
    for model in &models.models {
        log::info!("  {} ({})", model.id, model.provider);
    }

    let request = ChatCompletionRequest::new(
        "gpt-5",
        vec![
            Message::system("You are a concise assistant."),
            Message::user("Write a haiku about distributed GPUs."),
        ],
    )
    .temperature(0.8)
    .max_tokens(100);

    let completion = client.chat().completions().create(request).await?;
    println!("{}", completion.text().unwrap_or_default());
    log::info!(
        "🔢 Tokens: {} prompt + {} completion",
        completion.usage.prompt_tokens,
        completion.usage.completion_tokens
    );

    let embedding = client
        .embeddings()
        .create(EmbeddingRequest::new("text-embedding-3-large", "distributed GPUs"))
        .await?;
    if let Some(vector) = embedding.vectors().next() {
        log::info!("🧮 Embedding dimension: {}", vector.len());
    }

    Ok(())
}
