//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_SCHEDULE_CHECK_SECS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_SYNC_POLL_SECS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub sync: SyncConfig,
    pub gemini: GeminiConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Blob store configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON file per collection key
    pub data_dir: PathBuf,
}

/// Synchronization loop configuration
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Fallback poll interval for the reconciliation loop
    pub poll_interval: Duration,
    /// Interval of the due-schedule checker
    pub schedule_check_interval: Duration,
}

/// Generative AI backend configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            sync: SyncConfig::from_env()?,
            gemini: GeminiConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            data_dir: PathBuf::from(
                env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            ),
        })
    }
}

impl SyncConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let poll_secs: u64 = env::var("SYNC_POLL_SECS")
            .unwrap_or_else(|_| DEFAULT_SYNC_POLL_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SYNC_POLL_SECS".to_string()))?;
        let check_secs: u64 = env::var("SCHEDULE_CHECK_SECS")
            .unwrap_or_else(|_| DEFAULT_SCHEDULE_CHECK_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SCHEDULE_CHECK_SECS".to_string()))?;

        Ok(Self {
            poll_interval: Duration::from_secs(poll_secs),
            schedule_check_interval: Duration::from_secs(check_secs),
        })
    }
}

impl GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env::var("GEMINI_API_KEY")
                .map_err(|_| ConfigError::Missing("GEMINI_API_KEY".to_string()))?,
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_sync_defaults() {
        let sync = SyncConfig {
            poll_interval: Duration::from_secs(DEFAULT_SYNC_POLL_SECS),
            schedule_check_interval: Duration::from_secs(DEFAULT_SCHEDULE_CHECK_SECS),
        };
        assert_eq!(sync.poll_interval, Duration::from_secs(2));
        assert_eq!(sync.schedule_check_interval, Duration::from_secs(30));
    }
}
