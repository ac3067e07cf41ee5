use std::sync::Arc;
use crate::services::llm_service::LlmService;
use crate::services::placeholder::PlaceholderGenerator;

#[derive(Clone)]
pub struct AppState {
    pub llm_service: Arc<LlmService>,
    pub placeholders: Arc<dyn PlaceholderGenerator>,
    /// Include raw error text in error envelopes (non-production only)
    pub expose_error_details: bool,
}
