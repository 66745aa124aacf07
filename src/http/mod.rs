//! HTTP API server for upload clients
//!
//! This module provides a REST API around the note pipeline:
//! - POST /notes/summarize - Transcribe and summarize an uploaded recording
//! - GET /notes/example - Worked sample note → SOAP pair
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
