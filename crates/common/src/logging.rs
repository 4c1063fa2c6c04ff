//! Provides utilities to initialize logging.
//!
//! Standard output is reserved for the tools' results, so every log line goes to standard error.
use std::{env, io};

use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "NODEKEY_SVC_LABEL";

/// Configuration for the logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the tool in logs.
    whoami: String,

    /// The level used when `RUST_LOG` is not set.
    default_level: LevelFilter,
}

impl LoggerConfig {
    /// Creates a new instance with whoami set and the default level at `INFO`.
    pub const fn new(whoami: String) -> Self {
        Self {
            whoami,
            default_level: LevelFilter::INFO,
        }
    }

    /// Creates a new instance with the whoami string set to the provided
    /// string.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// Sets the level used when `RUST_LOG` is absent.
    pub fn set_default_level(&mut self, level: LevelFilter) {
        self.default_level = level;
    }

    /// The whoami string logged on startup.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(nodekey)")
    }
}

/// Initializes the logging subsystem with the provided config.
pub fn init(config: LoggerConfig) {
    let filt = EnvFilter::builder()
        .with_default_directive(config.default_level.into())
        .from_env_lossy();

    let log_file = env::var("LOG_FILE").is_ok_and(|v| v == "1");
    let log_line_num = env::var("LOG_LINE_NUM").is_ok_and(|v| v == "1");

    let stderr_sub = tracing_subscriber::fmt::layer()
        .event_format(
            tracing_subscriber::fmt::format()
                .compact()
                .with_file(log_file)
                .with_line_number(log_line_num),
        )
        .with_writer(io::stderr)
        .with_filter(filt);

    tracing_subscriber::registry().with(stderr_sub).init();

    info!(whoami = %config.whoami, "logging started");
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    match get_service_label_from_env() {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_logs_at_info() {
        let config = LoggerConfig::new("nodekey-test".to_string());
        assert_eq!(config.default_level, LevelFilter::INFO);
        assert_eq!(config.whoami(), "nodekey-test");
    }

    #[test]
    fn default_level_can_be_lowered() {
        let mut config = LoggerConfig::new("nodekey-test".to_string());
        config.set_default_level(LevelFilter::WARN);
        assert_eq!(config.default_level, LevelFilter::WARN);
    }
}
