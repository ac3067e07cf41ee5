use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

/// Filter used when `RUST_LOG` is unset or unparseable
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub loki_enabled: bool,
    pub loki_url: Option<String>,
    /// Loki `service` label
    pub service_name: String,
    /// Loki `environment` label
    pub environment: String,
    pub log_level: String,
}

/// Where log events end up besides stdout
#[derive(Debug, Clone, PartialEq)]
pub enum LogSink {
    Console,
    Loki(Url),
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            loki_enabled: var_or("LOKI_ENABLED", "false").parse().unwrap_or(false),
            loki_url: std::env::var("LOKI_URL").ok(),
            service_name: var_or("SERVICE_NAME", "edunet-backend"),
            environment: var_or("ENVIRONMENT", "development"),
            log_level: var_or("RUST_LOG", DEFAULT_FILTER),
        }
    }

    /// Resolve the sink, rejecting an enabled Loki shipper without a usable URL
    pub fn sink(&self) -> anyhow::Result<LogSink> {
        if !self.loki_enabled {
            return Ok(LogSink::Console);
        }

        let raw = self
            .loki_url
            .as_deref()
            .context("LOKI_ENABLED is set but LOKI_URL is missing")?;
        let url = Url::parse(raw).with_context(|| format!("LOKI_URL is not a valid URL: {}", raw))?;
        Ok(LogSink::Loki(url))
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. Call once, inside the tokio runtime.
pub fn init_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let sink = config.sink()?;
    let stdout = tracing_subscriber::registry()
        .with(config.env_filter())
        .with(tracing_subscriber::fmt::layer());

    match sink {
        LogSink::Console => {
            stdout.try_init()?;
            info!("📊 EduNet backend logging to stdout (filter: {})", config.log_level);
        }
        #[cfg(feature = "loki")]
        LogSink::Loki(url) => {
            let (loki, shipper) = tracing_loki::builder()
                .label("service", &config.service_name)?
                .label("environment", &config.environment)?
                .build_url(url.clone())?;
            tokio::spawn(shipper);

            stdout.with(loki).try_init()?;
            info!("📡 EduNet backend logs shipping to Loki at {} as {}", url, config.service_name);
        }
        #[cfg(not(feature = "loki"))]
        LogSink::Loki(url) => {
            stdout.try_init()?;
            tracing::warn!("Built without the loki feature, ignoring LOKI_URL {}", url);
        }
    }

    Ok(())
}
