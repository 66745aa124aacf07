use super::prompt;
use crate::config::SummarizationConfig;
use crate::error::{PipelineError, ProviderError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Text-generation client trait
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    /// Convert a transcript into a SOAP-format note.
    ///
    /// Accepts any transcript, including the empty string. Deciding what
    /// "not enough information" means is the provider's business, not the
    /// client's.
    async fn summarize(&self, transcript: &str) -> Result<String, ProviderError>;

    /// Get client name for logging
    fn name(&self) -> &str;
}

/// Chat-completions request payload: a fixed model identifier and exactly
/// two messages (system persona + user template). No sampling-parameter
/// overrides are sent; temperature and max tokens stay at provider defaults.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat-completions response. Fields are required: a response that parses
/// but lacks any of them is a contract violation, not an empty note.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// OpenAI-style chat-completions client.
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(config: &SummarizationConfig, api_key: String) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                PipelineError::Configuration(format!("Failed to build summarization client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            api_key,
            model: config.model.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String, ProviderError> {
        info!(
            "Requesting SOAP summary from model {} ({} transcript characters)",
            self.model,
            transcript.len()
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt::SYSTEM_MESSAGE.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt::soap_request(transcript),
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
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

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Contract(e.to_string()))?;

        let note = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::Contract("response contained no completions".to_string())
            })?;

        debug!("Summarization returned {} characters", note.len());

        Ok(note)
    }

    fn name(&self) -> &str {
        "openai"
    }
}
