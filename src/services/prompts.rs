//! Prompt templates, one per capability. All functions are pure.

use serde_json::Value;

use crate::models::{NetworkSample, PerformanceMetrics};

pub fn tutor_prompt(question: &str) -> String {
    format!("As an AI tutor, please answer the following question: {}", question)
}

/// Difficulty is embedded as given; 1-10 is expected but not enforced.
pub fn evaluation_prompt(question: &str, answer: &str, difficulty: &Value) -> String {
    let difficulty = match difficulty {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };

    format!(
        r#"Question: "{}"
Student's Answer: "{}"
Difficulty Level: {}/10

Please evaluate the student's answer based on the following criteria:
1. Relevance to the question
2. Depth of understanding
3. Critical thinking
4. Clarity of expression

Provide a brief feedback comment (2-3 sentences) and a score between 0 and 1, where 0 is completely incorrect and 1 is a perfect answer.

Format your response as a JSON object with 'comment' and 'score' fields."#,
        question, answer, difficulty
    )
}

/// Absent historical data is rendered as `{}`.
pub fn network_analyst_prompt(query: &str, historical_data: Option<&Value>) -> String {
    let history = historical_data
        .map(Value::to_string)
        .unwrap_or_else(|| "{}".to_string());

    format!(
        r#"Act as a Network Health AI Analyst. Analyze this network query: "{}"
Historical data: {}
Respond in this format:
[SEVERITY: LOW/MEDIUM/HIGH]
[SCORE: 0.0-1.0] (how likely the issue needs escalation)
**Summary**: One-line emoji-rich summary
**Predictions**: 3 comma-separated future predictions
**Recommendations**: 3 comma-separated action items
**Technical Analysis**: 2-3 sentence expert analysis"#,
        query, history
    )
}

pub fn performance_prompt(metrics: &PerformanceMetrics) -> String {
    format!(
        r#"Analyze the following network performance data:
Bandwidth: {:.2} Mbps
Latency: {:.2} ms
Packet Loss: {:.2}%

Provide a brief assessment of the network quality and any potential issues or recommendations.
Consider the following in your analysis:
- Is the bandwidth sufficient for most online activities?
- Is the latency acceptable for real-time applications?
- Is the packet loss within an acceptable range?

Keep the response concise, within 2-3 sentences."#,
        metrics.bandwidth, metrics.latency, metrics.packet_loss
    )
}

pub fn insights_prompt(sample: &NetworkSample) -> String {
    format!(
        r#"Provide insights on the following school network readings:
Bandwidth: {:.2}
Latency: {:.2} ms
Downtime: {:.2}

Point out anything that would disrupt online learning and suggest improvements.
Keep the response concise, within 2-3 sentences."#,
        sample.bandwidth, sample.latency, sample.downtime
    )
}
