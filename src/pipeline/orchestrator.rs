use super::result::SoapSummary;
use crate::audio::AudioPayload;
use crate::error::PipelineError;
use crate::summarization::Summarizer;
use crate::transcription::Transcriber;
use tracing::{error, info};

/// Sequences the two provider clients and owns the input contract.
///
/// Holds the clients as trait objects so shells and tests can swap in any
/// implementation. Stateless across calls: concurrent invocations share
/// nothing mutable.
pub struct NotePipeline {
    transcriber: Box<dyn Transcriber>,
    summarizer: Box<dyn Summarizer>,
}

impl NotePipeline {
    pub fn new(transcriber: Box<dyn Transcriber>, summarizer: Box<dyn Summarizer>) -> Self {
        Self {
            transcriber,
            summarizer,
        }
    }

    /// Run one audio payload through validation, transcription and
    /// summarization.
    ///
    /// Exactly one attempt is made per stage. A transcription failure stops
    /// the pipeline before summarization; a summarization failure carries
    /// the already-produced transcript in the error.
    pub async fn process(&self, audio: &AudioPayload) -> Result<SoapSummary, PipelineError> {
        audio.validate()?;

        info!(
            "Processing {} bytes of {} audio via {}",
            audio.len(),
            audio.encoding(),
            self.transcriber.name()
        );

        let transcript = match self.transcriber.transcribe(audio).await {
            Ok(transcript) => transcript,
            Err(source) => {
                error!("Transcription failed: {}", source);
                return Err(PipelineError::Transcription { source });
            }
        };

        // An empty transcript is still summarized; "insufficient
        // information" is the provider's call, not ours.
        if transcript.is_empty() {
            info!("Transcription produced no speech; summarizing anyway");
        } else {
            info!("Transcription complete ({} characters)", transcript.len());
        }

        let note = match self.summarizer.summarize(&transcript).await {
            Ok(note) => note,
            Err(source) => {
                error!("Summarization failed: {}", source);
                return Err(PipelineError::Summarization { transcript, source });
            }
        };

        info!(
            "SOAP summary complete ({} characters) via {}",
            note.len(),
            self.summarizer.name()
        );

        Ok(SoapSummary { transcript, note })
    }
}
