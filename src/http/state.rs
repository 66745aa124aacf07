use crate::pipeline::NotePipeline;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The note pipeline; stateless across requests, so one shared instance
    /// serves all concurrent uploads.
    pub pipeline: Arc<NotePipeline>,
}

impl AppState {
    pub fn new(pipeline: NotePipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
