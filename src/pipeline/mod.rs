//! Two-stage note pipeline
//!
//! This module provides the `NotePipeline` orchestrator that sequences:
//! - Payload validation (fail fast, no network)
//! - Speech-to-text via a `Transcriber`
//! - SOAP summarization via a `Summarizer`
//!
//! Each invocation is single-shot and stateless across calls; failures are
//! tagged with the stage they occurred in.

mod orchestrator;
mod result;

pub use orchestrator::NotePipeline;
pub use result::{SoapSummary, Stage};
