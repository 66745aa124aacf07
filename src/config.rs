use crate::error::PipelineError;
use anyhow::Result;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub transcription: TranscriptionConfig,
    pub summarization: SummarizationConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionConfig {
    /// Base URL of the speech-recognition API.
    pub base_url: String,
    /// Request timeout for one transcription call.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizationConfig {
    /// Base URL of the text-generation API.
    pub base_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Request timeout for one summarization call.
    pub timeout_secs: u64,
}

impl Config {
    /// Load settings from an optional file plus `SOAP_SCRIBE_`-prefixed
    /// environment overrides, on top of compiled-in defaults.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "soap-scribe")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 8080)?
            .set_default("transcription.base_url", "https://api.deepgram.com")?
            .set_default("transcription.timeout_secs", 30)?
            .set_default("summarization.base_url", "https://api.openai.com")?
            .set_default("summarization.model", "gpt-4")?
            .set_default("summarization.timeout_secs", 60)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SOAP_SCRIBE").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// Provider credentials, read once from the process environment at startup.
///
/// A missing credential is a startup-time configuration error, never
/// deferred to the first request.
#[derive(Clone)]
pub struct Credentials {
    pub deepgram_api_key: String,
    pub openai_api_key: String,
}

impl Credentials {
    pub const DEEPGRAM_VAR: &'static str = "DEEPGRAM_API_KEY";
    pub const OPENAI_VAR: &'static str = "OPENAI_API_KEY";

    pub fn from_env() -> Result<Self, PipelineError> {
        Ok(Self {
            deepgram_api_key: require_env(Self::DEEPGRAM_VAR)?,
            openai_api_key: require_env(Self::OPENAI_VAR)?,
        })
    }
}

// Secrets must not leak through debug logging.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("deepgram_api_key", &"[redacted]")
            .field("openai_api_key", &"[redacted]")
            .finish()
    }
}

fn require_env(name: &str) -> Result<String, PipelineError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PipelineError::Configuration(format!(
            "{} is not set in the environment",
            name
        ))),
    }
}
