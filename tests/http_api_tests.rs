// Integration tests for the HTTP API
//
// These drive the full router with stubbed pipeline clients via
// tower::ServiceExt, asserting the request/response contract the upload
// page depends on: status codes, stage tagging, and the distinction
// between "empty transcript" and "failed".

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use soap_scribe::error::ProviderError;
use soap_scribe::{AppState, AudioPayload, NotePipeline, Summarizer, Transcriber};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

struct StubTranscriber {
    calls: Arc<AtomicUsize>,
    result: Result<String, String>,
}

#[async_trait::async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(&self, _audio: &AudioPayload) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .map_err(ProviderError::Transport)
    }

    fn name(&self) -> &str {
        "stub-transcriber"
    }
}

struct StubSummarizer {
    calls: Arc<AtomicUsize>,
    result: Result<String, String>,
}

#[async_trait::async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, _transcript: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .map_err(ProviderError::Transport)
    }

    fn name(&self) -> &str {
        "stub-summarizer"
    }
}

struct TestApp {
    router: axum::Router,
    transcriber_calls: Arc<AtomicUsize>,
    summarizer_calls: Arc<AtomicUsize>,
}

fn test_app(
    transcriber_result: Result<String, String>,
    summarizer_result: Result<String, String>,
) -> TestApp {
    let transcriber_calls = Arc::new(AtomicUsize::new(0));
    let summarizer_calls = Arc::new(AtomicUsize::new(0));

    let pipeline = NotePipeline::new(
        Box::new(StubTranscriber {
            calls: Arc::clone(&transcriber_calls),
            result: transcriber_result,
        }),
        Box::new(StubSummarizer {
            calls: Arc::clone(&summarizer_calls),
            result: summarizer_result,
        }),
    );

    TestApp {
        router: soap_scribe::create_router(AppState::new(pipeline)),
        transcriber_calls,
        summarizer_calls,
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn upload_request(content_type: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/notes/summarize")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(Ok("unused".into()), Ok("unused".into()));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_example_route_serves_sample_pair() {
    let app = test_app(Ok("unused".into()), Ok("unused".into()));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/notes/example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["note"].as_str().unwrap().contains("45-year-old"));
    assert!(json["soap"].as_str().unwrap().contains("Subjective:"));
    assert!(json["soap"].as_str().unwrap().contains("Plan:"));
}

#[tokio::test]
async fn test_summarize_success_returns_transcript_and_note() {
    let app = test_app(
        Ok("Patient reports headache.".into()),
        Ok("SOAP note text".into()),
    );

    let response = app
        .router
        .oneshot(upload_request("audio/wav", vec![1, 2, 3, 4]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["transcript"], "Patient reports headache.");
    assert_eq!(json["note"], "SOAP note text");
    assert!(!json["request_id"].as_str().unwrap().is_empty());
    assert!(json["processed_at"].is_string());
}

#[tokio::test]
async fn test_summarize_empty_transcript_is_a_success() {
    let app = test_app(Ok("".into()), Ok("Insufficient information.".into()));

    let response = app
        .router
        .oneshot(upload_request("audio/wav", vec![0u8; 16]))
        .await
        .unwrap();

    // Silent audio still returns 200 with an empty transcript; only
    // failures carry a stage.
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["transcript"], "");
    assert_eq!(json["note"], "Insufficient information.");
}

#[tokio::test]
async fn test_summarize_rejects_unsupported_content_type() {
    let app = test_app(Ok("unused".into()), Ok("unused".into()));
    let transcriber_calls = Arc::clone(&app.transcriber_calls);
    let summarizer_calls = Arc::clone(&app.summarizer_calls);

    let response = app
        .router
        .oneshot(upload_request("application/json", vec![1, 2, 3]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("content type"));
    assert!(json["stage"].is_null());

    // Rejected before the pipeline ran.
    assert_eq!(transcriber_calls.load(Ordering::SeqCst), 0);
    assert_eq!(summarizer_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_summarize_rejects_missing_content_type() {
    let app = test_app(Ok("unused".into()), Ok("unused".into()));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/notes/summarize")
                .body(Body::from(vec![1, 2, 3]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_summarize_rejects_empty_body_without_calling_pipeline_clients() {
    let app = test_app(Ok("unused".into()), Ok("unused".into()));
    let transcriber_calls = Arc::clone(&app.transcriber_calls);

    let response = app
        .router
        .oneshot(upload_request("audio/wav", Vec::new()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("empty"));
    assert!(json["stage"].is_null());
    assert_eq!(transcriber_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_summarize_reports_transcription_stage_on_failure() {
    let app = test_app(Err("connection refused".into()), Ok("unused".into()));
    let summarizer_calls = Arc::clone(&app.summarizer_calls);

    let response = app
        .router
        .oneshot(upload_request("audio/mpeg", vec![0u8; 16]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["stage"], "transcription");
    assert!(json["transcript"].is_null());
    assert_eq!(summarizer_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_summarize_surfaces_transcript_when_summarization_fails() {
    let app = test_app(
        Ok("Patient reports headache.".into()),
        Err("operation timed out".into()),
    );

    let response = app
        .router
        .oneshot(upload_request("audio/wav", vec![0u8; 16]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["stage"], "summarization");
    assert_eq!(json["transcript"], "Patient reports headache.");
    assert!(json["error"].as_str().unwrap().contains("timed out"));
}
