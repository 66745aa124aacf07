pub mod audio;
pub mod config;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod sample;
pub mod summarization;
pub mod transcription;

pub use audio::{AudioEncoding, AudioPayload};
pub use config::{Config, Credentials};
pub use error::{PipelineError, ProviderError};
pub use http::{create_router, AppState};
pub use pipeline::{NotePipeline, SoapSummary, Stage};
pub use summarization::{OpenAiSummarizer, Summarizer};
pub use transcription::{DeepgramTranscriber, Transcriber};
