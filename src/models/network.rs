use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchoolUptime {
    pub school: String,
    pub uptime: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyProgress {
    pub week: String,
    pub progress: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub network_status: Vec<SchoolUptime>,
    pub learning_progress: Vec<WeeklyProgress>,
}

/// One simulated reading of link health
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NetworkSample {
    pub bandwidth: f64,
    pub latency: f64,
    pub downtime: f64,
}

/// Simulated bandwidth (Mbps), latency (ms) and packet loss (%)
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PerformanceMetrics {
    pub bandwidth: f64,
    pub latency: f64,
    pub packet_loss: f64,
}

impl PerformanceMetrics {
    /// Wire order expected by the dashboard chart.
    pub fn as_array(&self) -> [f64; 3] {
        [self.bandwidth, self.latency, self.packet_loss]
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub performance_data: [f64; 3],
    pub analysis: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightsRequest {
    #[serde(default)]
    pub bandwidth: Option<f64>,
    #[serde(default)]
    pub latency: Option<f64>,
    #[serde(default)]
    pub downtime: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenericInsights {
    pub insights: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_report_wire_shape() {
        let metrics = PerformanceMetrics { bandwidth: 50.0, latency: 20.0, packet_loss: 1.5 };
        let report = PerformanceReport {
            performance_data: metrics.as_array(),
            analysis: "Fine".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["performanceData"], serde_json::json!([50.0, 20.0, 1.5]));
        assert_eq!(json["analysis"], "Fine");
    }
}
