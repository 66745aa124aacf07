use crate::pipeline::Stage;
use thiserror::Error;

/// Failure of a single outbound provider call.
///
/// Both provider clients (speech recognition and text generation) report
/// their failures through this type; the orchestrator tags it with the stage
/// it occurred in.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Connection, timeout or aborted-request failures.
    #[error("request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success HTTP status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider answered 2xx but the body violated the expected schema.
    #[error("malformed provider response: {0}")]
    Contract(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

/// Error returned by the note pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The audio payload failed validation; no network call was made.
    #[error("invalid audio payload: {reason}")]
    Validation { reason: String },

    /// The speech-recognition stage failed.
    #[error("transcription failed: {source}")]
    Transcription {
        #[source]
        source: ProviderError,
    },

    /// The text-generation stage failed. The transcript produced by the
    /// earlier stage is carried along so callers need not redo transcription.
    #[error("summarization failed: {source}")]
    Summarization {
        transcript: String,
        #[source]
        source: ProviderError,
    },

    /// Missing credentials or an unbuildable client at startup.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PipelineError {
    /// The pipeline stage this error occurred in, if it occurred in one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::Transcription { .. } => Some(Stage::Transcription),
            PipelineError::Summarization { .. } => Some(Stage::Summarization),
            PipelineError::Validation { .. } | PipelineError::Configuration(_) => None,
        }
    }
}
