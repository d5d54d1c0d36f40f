//! Configuration module
//!
//! Reads configuration from a TOML file (~/.config/park-smart/config.toml).
//! Every field has a default, so a partial file or no file at all is fine.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    pub level: String,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Bind address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Default config path: `~/.config/park-smart/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("park-smart")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn full_file_parses() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9090

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.address(), "127.0.0.1:9090");
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn address_joins_host_and_port() {
        assert_eq!(AppConfig::default().address(), "0.0.0.0:3000");
    }
}
