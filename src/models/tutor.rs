use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TutorQuestion {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TutorReply {
    pub response: String,
}

/// Student answer submitted for grading
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerSubmission {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    /// Expected 1-10, but embedded in the prompt as given (number or string).
    #[serde(default)]
    pub difficulty: Option<serde_json::Value>,
}

/// Grading produced by the provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationResult {
    pub comment: String,
    /// Expected 0-1; passed through as returned.
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationFeedback {
    pub feedback: EvaluationResult,
}
