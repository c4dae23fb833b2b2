pub mod account_client;
pub mod audio_client;
pub mod batch_client;
pub mod chat_client;
pub mod embeddings_client;
pub mod images_client;
pub mod models_client;
pub mod provider_client;
pub mod training_client;

use crate::{config::ClientConfig, error::Result, transport::Transport};

pub use account_client::{DevicesClient, StatusClient, UsageClient};
pub use audio_client::AudioClient;
pub use batch_client::BatchClient;
pub use chat_client::{ChatClient, CompletionsClient};
pub use embeddings_client::EmbeddingsClient;
pub use images_client::ImagesClient;
pub use models_client::ModelsClient;
pub use provider_client::{HardwareClient, ProviderClient};
pub use training_client::{JobsClient, TrainingClient};

/// Entry point: one client per API resource, all sharing a single transport.
///
/// ```no_run
/// # async fn run() -> regraph::Result<()> {
/// use regraph::{ChatCompletionRequest, Message, ReGraphClient};
///
/// let client = ReGraphClient::with_api_key("rg-...")?;
/// let completion = client
///     .chat()
///     .completions()
///     .create(ChatCompletionRequest::new("gpt-5", vec![Message::user("Hello!")]))
///     .await?;
/// println!("{}", completion.text().unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReGraphClient {
    transport: Transport,
    chat_client: ChatClient,
    embeddings_client: EmbeddingsClient,
    images_client: ImagesClient,
    audio_client: AudioClient,
    models_client: ModelsClient,
    training_client: TrainingClient,
    batch_client: BatchClient,
    usage_client: UsageClient,
    devices_client: DevicesClient,
    status_client: StatusClient,
    provider_client: ProviderClient,
    hardware_client: HardwareClient,
}

impl ReGraphClient {
    /// Fails with an authentication error when no API key is configured.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        log::debug!("ReGraph client configured for {}", transport.base_url());

        Ok(Self {
            chat_client: ChatClient::new(transport.clone()),
            embeddings_client: EmbeddingsClient::new(transport.clone()),
            images_client: ImagesClient::new(transport.clone()),
            audio_client: AudioClient::new(transport.clone()),
            models_client: ModelsClient::new(transport.clone()),
            training_client: TrainingClient::new(transport.clone()),
            batch_client: BatchClient::new(transport.clone()),
            usage_client: UsageClient::new(transport.clone()),
            devices_client: DevicesClient::new(transport.clone()),
            status_client: StatusClient::new(transport.clone()),
            provider_client: ProviderClient::new(transport.clone()),
            hardware_client: HardwareClient::new(transport.clone()),
            transport,
        })
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new().with_api_key(api_key))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_dotenv())
    }

    /// Raw access for endpoints without a typed wrapper.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat_client
    }

    pub fn embeddings(&self) -> &EmbeddingsClient {
        &self.embeddings_client
    }

    pub fn images(&self) -> &ImagesClient {
        &self.images_client
    }

    pub fn audio(&self) -> &AudioClient {
        &self.audio_client
    }

    pub fn models(&self) -> &ModelsClient {
        &self.models_client
    }

    pub fn training(&self) -> &TrainingClient {
        &self.training_client
    }

    pub fn batch(&self) -> &BatchClient {
        &self.batch_client
    }

    pub fn usage(&self) -> &UsageClient {
        &self.usage_client
    }

    pub fn devices(&self) -> &DevicesClient {
        &self.devices_client
    }

    pub fn status(&self) -> &StatusClient {
        &self.status_client
    }

    pub fn provider(&self) -> &ProviderClient {
        &self.provider_client
    }

    pub fn hardware(&self) -> &HardwareClient {
        &self.hardware_client
    }
}
