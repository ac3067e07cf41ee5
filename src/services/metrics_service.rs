use rand::Rng;

use crate::models::{DashboardData, NetworkSample, PerformanceMetrics, SchoolUptime, WeeklyProgress};

/// Fixed school uptime and learning progress series shown on the landing dashboard
pub fn dashboard_data() -> DashboardData {
    let network_status = [
        ("School A", 98.5),
        ("School B", 95.2),
        ("School C", 92.7),
        ("School D", 97.1),
        ("School E", 99.3),
    ]
    .into_iter()
    .map(|(school, uptime)| SchoolUptime { school: school.to_string(), uptime })
    .collect();

    let learning_progress = [22, 37, 48, 62, 78]
        .into_iter()
        .enumerate()
        .map(|(i, progress)| WeeklyProgress { week: format!("Week {}", i + 1), progress })
        .collect();

    DashboardData {
        network_status,
        learning_progress,
    }
}

/// Random link reading: bandwidth 0-100, latency 0-200, downtime 0-10
pub fn sample_network() -> NetworkSample {
    let mut rng = rand::rng();
    NetworkSample {
        bandwidth: rng.random::<f64>() * 100.0,
        latency: rng.random::<f64>() * 200.0,
        downtime: rng.random::<f64>() * 10.0,
    }
}

/// Random bandwidth (0-100 Mbps), latency (0-200 ms) and packet loss (0-5 %)
pub fn simulate_performance() -> PerformanceMetrics {
    let mut rng = rand::rng();
    PerformanceMetrics {
        bandwidth: rng.random::<f64>() * 100.0,
        latency: rng.random::<f64>() * 200.0,
        packet_loss: rng.random::<f64>() * 5.0,
    }
}
