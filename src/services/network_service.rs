use tracing::info;

use crate::errors::AppError;
use crate::models::{
    GenericInsights, InsightsRequest, NetworkInsightQuery, NetworkSample, PerformanceReport,
    StructuredInsight,
};
use crate::services::llm_service::LlmService;
use crate::services::placeholder::PlaceholderGenerator;
use crate::services::{metrics_service, normalizer, prompts, require};

pub const NO_INSIGHTS: &str = "No insights available.";

/// Run a network-health question through the analyst prompt and tagged-format extraction
pub async fn analyze_query(
    llm_service: &LlmService,
    placeholders: &dyn PlaceholderGenerator,
    request: NetworkInsightQuery,
) -> Result<StructuredInsight, AppError> {
    let query = require(request.query, "query")?;
    info!("Analyzing network query ({} chars, history: {})",
          query.len(), request.historical_data.is_some());

    let prompt = prompts::network_analyst_prompt(&query, request.historical_data.as_ref());
    let completion = llm_service.generate_completion(prompt).await?;

    let insight = normalizer::normalize_network_insight(&completion, placeholders);
    info!("Network insight severity: {}", insight.severity);
    Ok(insight)
}

/// Simulate a performance reading and ask for a short assessment of it
pub async fn analyze_performance(llm_service: &LlmService) -> Result<PerformanceReport, AppError> {
    let metrics = metrics_service::simulate_performance();
    info!("Analyzing simulated performance: {:.2} Mbps, {:.2} ms, {:.2}% loss",
          metrics.bandwidth, metrics.latency, metrics.packet_loss);

    let analysis = llm_service
        .generate_completion(prompts::performance_prompt(&metrics))
        .await?;

    Ok(PerformanceReport {
        performance_data: metrics.as_array(),
        analysis,
    })
}

pub async fn generic_insights(
    llm_service: &LlmService,
    request: InsightsRequest,
) -> Result<GenericInsights, AppError> {
    let sample = NetworkSample {
        bandwidth: require(request.bandwidth, "bandwidth")?,
        latency: require(request.latency, "latency")?,
        downtime: require(request.downtime, "downtime")?,
    };
    info!("Generating insights for {:?}", sample);

    let completion = llm_service
        .generate_completion(prompts::insights_prompt(&sample))
        .await?;

    let insights = if completion.trim().is_empty() {
        NO_INSIGHTS.to_string()
    } else {
        completion
    };

    Ok(GenericInsights { insights })
}
