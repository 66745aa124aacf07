use super::state::AppState;
use crate::audio::{AudioEncoding, AudioPayload};
use crate::error::PipelineError;
use crate::pipeline::Stage;
use crate::sample;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Plain-text transcript; empty string means "no speech detected",
    /// which is a success, not a failure.
    pub transcript: String,

    /// Generated SOAP-format note.
    pub note: String,

    /// Server-side request identifier (for log correlation).
    pub request_id: String,

    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// The failing pipeline stage, absent for validation failures.
    pub stage: Option<Stage>,

    /// Transcript produced before a summarization failure, so the caller
    /// does not have to redo transcription.
    pub transcript: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExampleResponse {
    pub note: String,
    pub soap: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /notes/summarize
/// Transcribe and summarize an uploaded audio recording.
///
/// The raw audio goes in the request body; the encoding is declared via the
/// Content-Type header (audio/wav, audio/mpeg or audio/mp4).
pub async fn summarize_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let request_id = uuid::Uuid::new_v4().to_string();

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let encoding = match AudioEncoding::from_content_type(content_type) {
        Some(encoding) => encoding,
        None => {
            warn!(
                "Rejected upload {} with unsupported content type {:?}",
                request_id, content_type
            );
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!(
                        "Unsupported content type {:?}; expected audio/wav, audio/mpeg or audio/mp4",
                        content_type
                    ),
                    stage: None,
                    transcript: None,
                }),
            )
                .into_response();
        }
    };

    info!(
        "Received upload {} ({} bytes, {})",
        request_id,
        body.len(),
        encoding
    );

    let payload = AudioPayload::new(body.to_vec(), encoding);

    match state.pipeline.process(&payload).await {
        Ok(summary) => {
            info!("Upload {} summarized successfully", request_id);
            (
                StatusCode::OK,
                Json(SummarizeResponse {
                    transcript: summary.transcript,
                    note: summary.note,
                    request_id,
                    processed_at: Utc::now(),
                }),
            )
                .into_response()
        }
        Err(err @ PipelineError::Validation { .. }) => {
            warn!("Upload {} failed validation: {}", request_id, err);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                    stage: None,
                    transcript: None,
                }),
            )
                .into_response()
        }
        Err(err @ PipelineError::Transcription { .. }) => {
            error!("Upload {} failed: {}", request_id, err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                    stage: Some(Stage::Transcription),
                    transcript: None,
                }),
            )
                .into_response()
        }
        Err(PipelineError::Summarization { transcript, source }) => {
            error!("Upload {} failed: summarization failed: {}", request_id, source);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("summarization failed: {}", source),
                    stage: Some(Stage::Summarization),
                    transcript: Some(transcript),
                }),
            )
                .into_response()
        }
        Err(err @ PipelineError::Configuration(_)) => {
            error!("Upload {} failed: {}", request_id, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                    stage: None,
                    transcript: None,
                }),
            )
                .into_response()
        }
    }
}

/// GET /notes/example
/// Worked sample: a dictated doctor's note and its SOAP summary.
pub async fn get_example() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ExampleResponse {
            note: sample::SAMPLE_NOTE.to_string(),
            soap: sample::SAMPLE_SOAP.to_string(),
        }),
    )
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
