use super::response::ListenResponse;
use crate::audio::AudioPayload;
use crate::config::TranscriptionConfig;
use crate::error::{PipelineError, ProviderError};
use reqwest::header;
use std::time::Duration;
use tracing::{debug, info};

/// Speech-to-text client trait
///
/// Implementations wrap one outbound call to a speech-recognition provider.
/// Mock implementations are used in tests to drive the orchestrator without
/// live providers.
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio payload to plain text.
    ///
    /// An empty transcript is a valid success value (silent audio) and is
    /// distinct from an `Err`.
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, ProviderError>;

    /// Get client name for logging
    fn name(&self) -> &str;
}

/// Deepgram-style speech-recognition client.
///
/// Issues a single POST of the raw audio bytes to `{base_url}/v1/listen`,
/// authenticated with the provider token. The underlying HTTP client carries
/// an explicit request timeout so a stalled provider cannot hold the
/// pipeline open indefinitely.
pub struct DeepgramTranscriber {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl DeepgramTranscriber {
    pub fn new(config: &TranscriptionConfig, api_key: String) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                PipelineError::Configuration(format!("Failed to build transcription client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/v1/listen", config.base_url.trim_end_matches('/')),
            api_key,
        })
    }
}

#[async_trait::async_trait]
impl Transcriber for DeepgramTranscriber {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, ProviderError> {
        info!(
            "Sending {} bytes of {} audio for transcription",
            audio.len(),
            audio.encoding()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, format!("Token {}", self.api_key))
            .header(header::CONTENT_TYPE, audio.encoding().content_type())
            .body(audio.bytes().to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ListenResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Contract(e.to_string()))?;

        let transcript = parsed.into_transcript();
        debug!("Transcription returned {} characters", transcript.len());

        Ok(transcript)
    }

    fn name(&self) -> &str {
        "deepgram"
    }
}
