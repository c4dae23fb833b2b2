use crate::{
    error::{ReGraphError, Result},
    models::{merge_extra, ChatCompletion, ChatCompletionRequest},
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct ChatClient {
    completions: CompletionsClient,
}

impl ChatClient {
    pub fn new(transport: Transport) -> Self {
        Self {
            completions: CompletionsClient::new(transport),
        }
    }

    pub fn completions(&self) -> &CompletionsClient {
        &self.completions
    }
}

#[derive(Debug, Clone)]
pub struct CompletionsClient {
    transport: Transport,
}

impl CompletionsClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, request: ChatCompletionRequest) -> Result<ChatCompletion> {
        if request.stream {
            return Err(ReGraphError::NotSupported(
                "Streaming chat completions are not supported".into(),
            ));
        }

        log::info!(
            "Creating chat completion with model: {} ({} messages)",
            request.model,
            request.messages.len()
        );

        let payload = merge_extra(serde_json::to_value(&request)?, &request.extra);
        self.transport.post("/inference", &payload).await
    }
}
