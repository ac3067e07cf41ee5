use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Failures raised while talking to the generative-language provider
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM features are disabled")]
    Disabled,
    #[error("LLM request timed out")]
    Timeout,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Rate limited by LLM provider")]
    RateLimited,
    #[error("LLM API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),
    #[error("Prompt blocked by provider: {0}")]
    Blocked(String),
}

impl LlmError {
    /// Whether another attempt could plausibly succeed. Client errors
    /// (bad key, unknown model) never are.
    pub fn is_transient(&self) -> bool {
        match self {
            LlmError::Timeout | LlmError::NetworkError(_) | LlmError::RateLimited => true,
            LlmError::ApiError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Malformed completion: {0}")]
    MalformedCompletion(String),
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

/// HTTP-facing error: a status code plus the envelope the client sees.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub envelope: ErrorEnvelope,
}

impl ApiError {
    pub fn internal(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            envelope: ErrorEnvelope {
                error: error.into(),
                message: None,
                details: None,
                debug: None,
            },
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            ..Self::internal(error)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.envelope.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.envelope.details = Some(details.into());
        self
    }

    /// Attach the raw error text, only when the deployment allows it.
    pub fn with_debug(mut self, debug: impl Into<String>, expose: bool) -> Self {
        if expose {
            self.envelope.debug = Some(debug.into());
        }
        self
    }

    /// Convert an [`AppError`] into the envelope for one capability.
    ///
    /// Validation failures always become a 400 carrying the validation
    /// message; everything else becomes a 500 with `error` as the
    /// user-facing message.
    pub fn from_app(err: &AppError, error: &str) -> Self {
        match err {
            AppError::Validation(msg) => Self::bad_request(msg.clone()),
            _ => Self::internal(error),
        }
    }
}

/// Unreadable bodies (bad JSON, wrong field types, missing Content-Type)
/// keep the rejection's status but answer with the JSON envelope.
/// Body rejections (bad syntax, wrong field types, missing content type) all answer 400
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let reason = rejection.body_text();
        warn!("Rejected request body ({}): {}", rejection.status(), reason);
        Self::bad_request(reason)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
