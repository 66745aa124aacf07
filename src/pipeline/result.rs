use serde::{Deserialize, Serialize};
use std::fmt;

/// The two sequential pipeline phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Transcription,
    Summarization,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Transcription => f.write_str("transcription"),
            Stage::Summarization => f.write_str("summarization"),
        }
    }
}

/// Successful pipeline output: the intermediate transcript and the
/// generated SOAP note. The note is opaque free text; no structural parsing
/// is performed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoapSummary {
    /// Plain-text transcript of the audio. May be empty (silent audio).
    pub transcript: String,

    /// Generated SOAP-format note.
    pub note: String,
}
