use crate::{
    error::Result,
    models::{merge_extra, AudioSpeech, SpeechRequest},
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct AudioClient {
    transport: Transport,
}

impl AudioClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Text to speech; the audio comes back base64-encoded.
    pub async fn speech(&self, request: SpeechRequest) -> Result<AudioSpeech> {
        log::info!(
            "Synthesizing speech with model: {} (voice {})",
            request.model,
            request.voice
        );

        let payload = merge_extra(serde_json::to_value(&request)?, &request.extra);
        self.transport.post("/audio/speech", &payload).await
    }
}
