//! Application configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub watcher: WatcherConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Command surface server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Presence watcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WatcherConfig {
    /// Raw identifier of the tracked identity (display fallback)
    pub target_id: String,
    /// URL the presence probe queries each cycle
    pub probe_url: String,
    /// Webhook for online notifications; absent means log-only
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_poll_interval_min")]
    pub poll_interval_min_secs: u64,
    #[serde(default = "default_poll_interval_max")]
    pub poll_interval_max_secs: u64,
}

impl WatcherConfig {
    /// Validate interval bounds
    ///
    /// # Errors
    /// Returns an error if the minimum poll interval exceeds the maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_min_secs > self.poll_interval_max_secs {
            return Err(ConfigError::InvalidValue(
                "POLL_INTERVAL_MIN_SECS",
                format!(
                    "{} exceeds POLL_INTERVAL_MAX_SECS ({})",
                    self.poll_interval_min_secs, self.poll_interval_max_secs
                ),
            ));
        }
        Ok(())
    }
}

// Default value functions
fn default_app_name() -> String {
    "vigil".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    2
}

fn default_poll_interval_min() -> u64 {
    60
}

fn default_poll_interval_max() -> u64 {
    120
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    /// or the poll interval bounds are inconsistent
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let watcher = WatcherConfig {
            target_id: env::var("TARGET_ID").map_err(|_| ConfigError::MissingVar("TARGET_ID"))?,
            probe_url: env::var("PRESENCE_PROBE_URL")
                .map_err(|_| ConfigError::MissingVar("PRESENCE_PROBE_URL"))?,
            webhook_url: env::var("NOTIFY_WEBHOOK_URL")
                .ok()
                .filter(|s| !s.is_empty()),
            poll_interval_min_secs: env::var("POLL_INTERVAL_MIN_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_poll_interval_min),
            poll_interval_max_secs: env::var("POLL_INTERVAL_MAX_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_poll_interval_max),
        };
        watcher.validate()?;

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_port),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            watcher,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
