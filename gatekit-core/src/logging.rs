//! Logging setup
//!
//! Built on the standard `log` facade with an `env_logger` backend:
//! configure once at startup, then use `log::info!` / `log::warn!` /
//! `log::error!` anywhere. Safe to call multiple times; only the first
//! initialization takes effect.

use std::env;
use std::sync::Once;

use anyhow::Result;
use serde::{Deserialize, Serialize};

static INIT: Once = Once::new();

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,

    /// Prefix each line with a UTC timestamp
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: LogLevel::Info, timestamps: true }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verbosity (builder style)
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(level) = env::var("GK_LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => self.level = LogLevel::Error,
                "warn" => self.level = LogLevel::Warn,
                "info" => self.level = LogLevel::Info,
                "debug" => self.level = LogLevel::Debug,
                "trace" => self.level = LogLevel::Trace,
                _ => {}
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Initialize the global logger.
///
/// Call once at startup; later calls are no-ops. `RUST_LOG`, when set,
/// still wins over the configured level (env_logger semantics).
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        builder.filter_level(config.level.to_filter());
        if !config.timestamps {
            builder.format_timestamp(None);
        }
        // try_init: another logger may already be installed in tests.
        let _ = builder.try_init();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parses_from_config_strings() {
        let config: LoggingConfig = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert!(config.timestamps);
    }

    #[test]
    fn test_init_is_reentrant() {
        let config = LoggingConfig::new().with_level(LogLevel::Debug);
        init_logging(&config).unwrap();
        init_logging(&config).unwrap();
    }
}
