use serde::{Deserialize, Serialize};

/// Coarse urgency classification attached to a network insight
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Case-insensitive lookup of a severity word.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Low => "🟢",
            Severity::Medium => "🟡",
            Severity::High => "🔴",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Display colors per severity, as consumed by the dashboard
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorCodes {
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
}

impl Default for ColorCodes {
    fn default() -> Self {
        Self {
            low: "#2ecc71",
            medium: "#f1c40f",
            high: "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelinePoint {
    pub day: String,
    pub risk: u32,
    pub bandwidth: u32,
}

/// Presentation filler. None of these values come from the model output.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisualData {
    pub risk_score: u32,
    pub priority_level: Severity,
    pub timeline: Vec<TimelinePoint>,
}

/// UI-ready record derived from a network-analyst completion
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredInsight {
    pub summary: String,
    pub severity: Severity,
    pub predictions: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub visual_data: VisualData,
    pub raw_text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub color_codes: ColorCodes,
    pub emoji: &'static str,
}

/// Free-text network question with optional historical context
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInsightQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub historical_data: Option<serde_json::Value>,
}
