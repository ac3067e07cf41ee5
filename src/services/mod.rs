pub mod llm_service;
pub mod metrics_service;
pub mod network_service;
pub mod normalizer;
pub mod placeholder;
pub mod prompts;
pub mod tutor_service;

use crate::errors::AppError;

/// Presence check for a required request field.
pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}
