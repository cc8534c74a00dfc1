//! Configuration parsing.
//!
//! Makers and logging can be configured from a single JSON file. Every field
//! is optional; missing fields keep their defaults.
//!
//! # Example config
//!
//! ```json
//! {
//!   "maker": { "delimiter": ";;", "log_errors": true, "log_level": "warn" },
//!   "logging": { "level": "info", "dir": "/tmp/log", "file_prefix": "serr", "json": false }
//! }
//! ```

use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Top-level application config, deserialized from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub maker: MakerConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.maker.validate()?;
        self.logging.validate()
    }
}

/// Settings applied to an [`ErrorMakerBuilder`](crate::ErrorMakerBuilder).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MakerConfig {
    /// Join delimiter for rendered errors (default: `"-"`).
    pub delimiter: Option<String>,

    /// Log every constructed error through a tracing sink.
    pub log_errors: Option<bool>,

    /// Level of the log events emitted for errors (default: `error`).
    pub log_level: Option<String>,
}

impl MakerConfig {
    /// Returns the configured event level, defaulting to `ERROR`.
    pub fn level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|l| Level::from_str(l).ok())
            .unwrap_or(Level::ERROR)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter.as_deref() == Some("") {
            return Err(ConfigError::EmptyDelimiter);
        }
        if let Some(level) = &self.log_level {
            parse_level(level)?;
        }
        Ok(())
    }
}

/// Subscriber settings consumed by [`init_logging`](crate::logging::init_logging).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter if `RUST_LOG` is not set. Accepts full `EnvFilter`
    /// directives such as `info,serr_http=debug`.
    pub level: String,

    /// Optional directory for daily-rotating log files.
    pub dir: Option<String>,

    /// Log file prefix.
    pub file_prefix: String,

    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            file_prefix: "serr".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidFilter(self.level.clone(), e.to_string()))
    }
}

fn parse_level(name: &str) -> Result<Level, ConfigError> {
    Level::from_str(name).map_err(|_| ConfigError::InvalidLevel(name.to_string()))
}

/// Parse and validate a JSON config string.
pub fn parse_config(content: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load, parse and validate a JSON config file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = parse_config("{}").unwrap();
        assert!(config.maker.delimiter.is_none());
        assert_eq!(config.maker.level(), Level::ERROR);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file_prefix, "serr");
        assert!(!config.logging.json);
    }

    #[test]
    fn full_config() {
        let config = parse_config(
            r#"{
                "maker": { "delimiter": ";;", "log_errors": true, "log_level": "warn" },
                "logging": { "level": "debug", "dir": "/tmp/log", "file_prefix": "app", "json": true }
            }"#,
        )
        .unwrap();
        assert_eq!(config.maker.delimiter.as_deref(), Some(";;"));
        assert_eq!(config.maker.log_errors, Some(true));
        assert_eq!(config.maker.level(), Level::WARN);
        assert_eq!(config.logging.dir.as_deref(), Some("/tmp/log"));
        assert!(config.logging.json);
    }

    #[test]
    fn rejects_bad_level() {
        let err = parse_config(r#"{ "maker": { "log_level": "loud" } }"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidLevel(l)) if l == "loud"
        ));
    }

    #[test]
    fn logging_level_accepts_filter_directives() {
        let config = parse_config(r#"{ "logging": { "level": "info,serr_http=debug" } }"#).unwrap();
        assert_eq!(config.logging.level, "info,serr_http=debug");

        let err = parse_config(r#"{ "logging": { "level": "serr=chatty" } }"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidFilter(f, _)) if f == "serr=chatty"
        ));
    }

    #[test]
    fn rejects_empty_delimiter() {
        let err = parse_config(r#"{ "maker": { "delimiter": "" } }"#).unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::EmptyDelimiter)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_config("{ not json").is_err());
    }
}
