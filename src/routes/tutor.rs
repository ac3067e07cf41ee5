use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::ApiError;
use crate::models::{AnswerSubmission, EvaluationFeedback, TutorQuestion, TutorReply};
use crate::routes::ApiJson;
use crate::services::tutor_service;
use crate::state::AppState;

const TUTOR_ERROR: &str = "An error occurred while processing your request.";
const EVALUATION_ERROR: &str = "Failed to evaluate answer";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tutor-question", post(tutor_question))
        .route("/evaluate-answer", post(evaluate_answer))
}

/// POST /api/tutor-question
///
/// Request body: `{ "question": "What is a subnet mask?" }`
/// Returns: `{ "response": "..." }` with emphasis markup removed
#[axum::debug_handler]
async fn tutor_question(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TutorQuestion>,
) -> Result<Json<TutorReply>, ApiError> {
    info!("POST /api/tutor-question");

    let reply = tutor_service::answer_question(&state.llm_service, request)
        .await
        .map_err(|e| {
            error!("Failed to answer tutor question: {}", e);
            ApiError::from_app(&e, TUTOR_ERROR)
        })?;

    Ok(Json(reply))
}

/// POST /api/evaluate-answer
///
/// Request body: `{ "question": "...", "answer": "...", "difficulty": 5 }`
/// Returns: `{ "feedback": { "comment": "...", "score": 0.8 } }`
#[axum::debug_handler]
async fn evaluate_answer(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<AnswerSubmission>,
) -> Result<Json<EvaluationFeedback>, ApiError> {
    info!("POST /api/evaluate-answer");

    let feedback = tutor_service::evaluate_answer(&state.llm_service, submission)
        .await
        .map_err(|e| {
            error!("Error evaluating answer: {}", e);
            ApiError::from_app(&e, EVALUATION_ERROR)
        })?;

    Ok(Json(EvaluationFeedback { feedback }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use futures::future::join_all;
    use serde_json::json;

    use crate::app::create_app;
    use crate::test_support::{call, call_raw, state_with, EchoProvider, FailingProvider, ScriptedProvider};

    #[tokio::test]
    async fn test_tutor_question_returns_plain_text() {
        let app = create_app(state_with(ScriptedProvider::new("A **subnet** splits a *network*.")));

        let (status, _, body) = call(app, "POST", "/api/tutor-question", Some(json!({ "question": "What is a subnet?" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "response": "A subnet splits a network." }));
    }

    #[tokio::test]
    async fn test_tutor_question_provider_failure_is_500() {
        let app = create_app(state_with(FailingProvider));

        let (status, _, body) = call(app, "POST", "/api/tutor-question", Some(json!({ "question": "q" }))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "An error occurred while processing your request." }));
    }

    #[tokio::test]
    async fn test_tutor_question_missing_field_is_400() {
        let app = create_app(state_with(EchoProvider));

        let (status, _, body) = call(app, "POST", "/api/tutor-question", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "question is required");
    }

    #[tokio::test]
    async fn test_tutor_question_wrong_field_type_is_json_400() {
        let app = create_app(state_with(EchoProvider));

        let (status, headers, body) = call(app, "POST", "/api/tutor-question", Some(json!({ "question": 5 }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(headers["content-type"], "application/json");
        assert!(body["error"].as_str().unwrap().contains("question"));
    }

    #[tokio::test]
    async fn test_tutor_question_malformed_body_is_json_400() {
        let app = create_app(state_with(EchoProvider));

        let (status, _, body) =
            call_raw(app, "POST", "/api/tutor-question", Some("application/json"), "{\"question\": ").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string(), "expected JSON envelope, got {}", body);
    }

    #[tokio::test]
    async fn test_tutor_question_without_content_type_is_json_400() {
        let app = create_app(state_with(EchoProvider));

        let (status, _, body) = call_raw(app, "POST", "/api/tutor-question", None, r#"{"question":"q"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_evaluate_answer_accepts_string_or_fractional_difficulty() {
        for difficulty in [json!("7"), json!(7.5)] {
            let app = create_app(state_with(ScriptedProvider::new(r#"{"comment": "Fine.", "score": 0.5}"#)));
            let request = json!({ "question": "q", "answer": "a", "difficulty": difficulty.clone() });

            let (status, _, body) = call(app, "POST", "/api/evaluate-answer", Some(request)).await;

            assert_eq!(status, StatusCode::OK, "difficulty {}", difficulty);
            assert_eq!(body["feedback"]["score"], 0.5);
        }
    }

    #[tokio::test]
    async fn test_evaluate_answer_passes_json_through() {
        let app = create_app(state_with(ScriptedProvider::new(
            r#"{"comment": "Correct and clearly explained.", "score": 0.9}"#,
        )));
        let request = json!({ "question": "What does DNS do?", "answer": "Maps names to IPs", "difficulty": 4 });

        let (status, _, body) = call(app, "POST", "/api/evaluate-answer", Some(request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "feedback": { "comment": "Correct and clearly explained.", "score": 0.9 } }));
    }

    #[tokio::test]
    async fn test_evaluate_answer_invalid_json_is_500() {
        let app = create_app(state_with(ScriptedProvider::new("Nice try! I'd give it 0.7.")));
        let request = json!({ "question": "q", "answer": "a", "difficulty": 2 });

        let (status, _, body) = call(app, "POST", "/api/evaluate-answer", Some(request)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to evaluate answer" }));
        assert!(body.get("feedback").is_none());
    }

    #[tokio::test]
    async fn test_concurrent_requests_do_not_share_state() {
        let app = create_app(state_with(EchoProvider));

        let requests = (0..16).map(|i| {
            let app = app.clone();
            async move {
                let question = format!("question number {}", i);
                let (status, _, body) =
                    call(app, "POST", "/api/tutor-question", Some(json!({ "question": question.clone() }))).await;
                (question, status, body)
            }
        });

        for (question, status, body) in join_all(requests).await {
            assert_eq!(status, StatusCode::OK);
            let response = body["response"].as_str().unwrap();
            assert!(response.ends_with(&question), "{} leaked into {}", question, response);
        }
    }
}
