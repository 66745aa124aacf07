//! Text-generation stage
//!
//! Wraps a single outbound call to an OpenAI-style chat-completions API:
//! transcript in, SOAP-format note out. Unlike the transcription stage,
//! there is no degrade-to-empty here: a response missing the expected
//! fields is a provider contract violation.

mod client;
pub mod prompt;

pub use client::{OpenAiSummarizer, Summarizer};
