//! Turns raw completion text into the structures the dashboard renders.
//!
//! The tagged-format extraction is best effort: the provider does not
//! reliably follow the requested layout, so every field falls back to a
//! fixed default when its pattern is missing. Evaluation parsing is the
//! opposite and fails loudly on anything that is not the requested JSON.

use std::sync::LazyLock;
use chrono::Utc;
use regex::Regex;
use tracing::warn;

use crate::errors::AppError;
use crate::models::{ColorCodes, EvaluationResult, Severity, StructuredInsight};
use crate::services::placeholder::PlaceholderGenerator;

pub const NO_PREDICTIONS: &str = "No predictions available";
pub const NO_RECOMMENDATIONS: &str = "No recommendations available";

const PREDICTION_MARKER: &str = "📉 ";
const RECOMMENDATION_MARKER: &str = "✅ ";
const SUMMARY_MARKER: &str = "🌟 ";

static SEVERITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[SEVERITY: (\w+)\]").expect("valid severity regex"));
static PREDICTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Predictions\**: (.*)").expect("valid predictions regex"));
static RECOMMENDATIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Recommendations\**: (.*)").expect("valid recommendations regex"));
static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[SCORE: ([0-9]*\.?[0-9]+)\]").expect("valid score regex"));

/// Remove emphasis markup (`**` and `*`). Idempotent.
pub fn strip_markup(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

/// Severity from a `[SEVERITY: <word>]` marker; medium when absent or unknown.
pub fn extract_severity(text: &str) -> Severity {
    SEVERITY_RE
        .captures(text)
        .and_then(|caps| Severity::from_word(&caps[1]))
        .unwrap_or_default()
}

/// Items of a `<Label>: a, b, c` line, each decorated with `marker`.
fn extract_list(re: &Regex, text: &str, marker: &str, placeholder: &str) -> Vec<String> {
    let line = re
        .captures(text)
        .map(|caps| caps[1].trim_end().to_string())
        .filter(|line| !line.is_empty());

    match line {
        Some(line) => line
            .split(", ")
            .map(|item| format!("{}{}", marker, item))
            .collect(),
        None => vec![placeholder.to_string()],
    }
}

pub fn extract_predictions(text: &str) -> Vec<String> {
    extract_list(&PREDICTIONS_RE, text, PREDICTION_MARKER, NO_PREDICTIONS)
}

pub fn extract_recommendations(text: &str) -> Vec<String> {
    extract_list(&RECOMMENDATIONS_RE, text, RECOMMENDATION_MARKER, NO_RECOMMENDATIONS)
}

/// First line of the completion, bold markers swapped for a decoration.
pub fn extract_summary(text: &str) -> String {
    text.split('\n')
        .next()
        .unwrap_or_default()
        .trim_end_matches('\r')
        .replace("**", SUMMARY_MARKER)
}

/// Optional `[SCORE: x]` marker, kept only inside 0.0-1.0.
pub fn extract_score(text: &str) -> Option<f64> {
    SCORE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|score| (0.0..=1.0).contains(score))
}

/// Build the UI record for a network-analyst completion.
///
/// `visualData` comes from `placeholders`, never from `text`.
pub fn normalize_network_insight(
    text: &str,
    placeholders: &dyn PlaceholderGenerator,
) -> StructuredInsight {
    let severity = extract_severity(text);

    StructuredInsight {
        summary: extract_summary(text),
        severity,
        predictions: extract_predictions(text),
        recommendations: extract_recommendations(text),
        score: extract_score(text),
        visual_data: placeholders.visual_data(),
        raw_text: strip_markup(text),
        timestamp: Utc::now(),
        color_codes: ColorCodes::default(),
        emoji: severity.emoji(),
    }
}

/// Parse an evaluator completion. The text must be the JSON object itself.
pub fn parse_evaluation(text: &str) -> Result<EvaluationResult, AppError> {
    serde_json::from_str::<EvaluationResult>(text).map_err(|e| {
        warn!("Evaluation completion is not valid JSON: {}", e);
        AppError::MalformedCompletion(e.to_string())
    })
}
