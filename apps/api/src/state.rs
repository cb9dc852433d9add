use std::sync::Arc;

use crate::config::Config;
use crate::documents::DocumentExtractor;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<DocumentExtractor>,
    /// `None` when no model is configured; question generation then serves dummy data.
    pub llm: Option<Arc<dyn CompletionModel>>,
    pub config: Config,
}
