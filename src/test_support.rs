//! Scripted providers and request helpers shared by the unit tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::errors::LlmError;
use crate::services::llm_service::{LlmConfig, LlmProvider, LlmService};
use crate::services::placeholder::SeededPlaceholders;
use crate::state::AppState;

/// Returns the prompt unchanged.
pub struct EchoProvider;

#[async_trait]
impl LlmProvider for EchoProvider {
    async fn generate_completion(&self, prompt: String) -> Result<String, LlmError> {
        Ok(prompt)
    }
}

/// Always answers with the same completion.
pub struct ScriptedProvider(pub String);

impl ScriptedProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn generate_completion(&self, _prompt: String) -> Result<String, LlmError> {
        Ok(self.0.clone())
    }
}

/// Always fails with a transport error.
pub struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    async fn generate_completion(&self, _prompt: String) -> Result<String, LlmError> {
        Err(LlmError::NetworkError("connection refused".to_string()))
    }
}

pub struct SlowProvider {
    pub delay: Duration,
}

#[async_trait]
impl LlmProvider for SlowProvider {
    async fn generate_completion(&self, prompt: String) -> Result<String, LlmError> {
        tokio::time::sleep(self.delay).await;
        Ok(prompt)
    }
}

/// Fails the first `failures` calls, then answers `"recovered"`.
pub struct FlakyProvider {
    failures: u32,
    error: fn(u32) -> LlmError,
    calls: AtomicU32,
}

impl FlakyProvider {
    /// Fails with transport errors.
    pub fn new(failures: u32) -> Self {
        Self::failing_with(failures, |call| {
            LlmError::NetworkError(format!("attempt {} failed", call + 1))
        })
    }

    pub fn failing_with(failures: u32, error: fn(u32) -> LlmError) -> Self {
        Self { failures, error, calls: AtomicU32::new(0) }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for FlakyProvider {
    async fn generate_completion(&self, _prompt: String) -> Result<String, LlmError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err((self.error)(call))
        } else {
            Ok("recovered".to_string())
        }
    }
}

/// Application state wired to `provider`, with seeded placeholders and
/// error detail exposed.
pub fn state_with(provider: impl LlmProvider + 'static) -> AppState {
    let config = LlmConfig {
        timeout: Duration::from_secs(2),
        ..LlmConfig::default()
    };
    AppState {
        llm_service: Arc::new(LlmService::with_provider(Arc::new(provider), config)),
        placeholders: Arc::new(SeededPlaceholders::new(7)),
        expose_error_details: true,
    }
}

/// Send one request through the router. Non-JSON bodies come back as a JSON string.
pub async fn call(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    match body {
        Some(json) => call_raw(app, method, uri, Some("application/json"), &json.to_string()).await,
        None => call_raw(app, method, uri, None, "").await,
    }
}

/// Send an arbitrary body, optionally without a Content-Type header
pub async fn call_raw(
    app: Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, headers, json)
}
