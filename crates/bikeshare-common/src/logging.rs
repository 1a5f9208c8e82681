//! Structured logging infrastructure for the dashboard

use crate::{BikeshareError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Default fmt output
    Plain,
    /// Newline-delimited JSON
    Json,
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "bikeshare_data=trace")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the env filter, preferring `RUST_LOG` when it is set
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = config.env_filter();
    let span_events = config.span_events();
    let targets = config.include_targets;

    let file = match &config.file_path {
        Some(path) => Some(Mutex::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        )),
        None => None,
    };

    match (config.format, file) {
        (LogFormat::Pretty, Some(file)) => install(
            env_filter,
            fmt::layer()
                .pretty()
                .with_span_events(span_events)
                .with_target(targets)
                .with_ansi(false)
                .with_writer(file),
        ),
        (LogFormat::Pretty, None) => install(
            env_filter,
            fmt::layer()
                .pretty()
                .with_span_events(span_events)
                .with_target(targets),
        ),
        (LogFormat::Compact, Some(file)) => install(
            env_filter,
            fmt::layer()
                .compact()
                .with_span_events(span_events)
                .with_target(targets)
                .with_ansi(false)
                .with_writer(file),
        ),
        (LogFormat::Compact, None) => install(
            env_filter,
            fmt::layer()
                .compact()
                .with_span_events(span_events)
                .with_target(targets),
        ),
        (LogFormat::Plain, Some(file)) => install(
            env_filter,
            fmt::layer()
                .with_span_events(span_events)
                .with_target(targets)
                .with_ansi(false)
                .with_writer(file),
        ),
        (LogFormat::Plain, None) => install(
            env_filter,
            fmt::layer()
                .with_span_events(span_events)
                .with_target(targets),
        ),
        (LogFormat::Json, Some(file)) => install(
            env_filter,
            fmt::layer()
                .json()
                .with_span_events(span_events)
                .with_target(targets)
                .with_writer(file),
        ),
        (LogFormat::Json, None) => install(
            env_filter,
            fmt::layer()
                .json()
                .with_span_events(span_events)
                .with_target(targets),
        ),
    }
}

fn install<L>(env_filter: EnvFilter, layer: L) -> Result<()>
where
    L: Layer<Layered<EnvFilter, Registry>> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .map_err(|e| BikeshareError::config_with_source("Failed to install tracing subscriber", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_span_events_follow_flag() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.span_events(), FmtSpan::NONE);
        config.include_spans = true;
        assert_eq!(config.span_events(), FmtSpan::NEW | FmtSpan::CLOSE);
    }

    #[test]
    fn test_log_format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(format, LogFormat::Compact);
        assert!(serde_json::from_str::<LogFormat>("\"fancy\"").is_err());
    }
}
