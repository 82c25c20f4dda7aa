use thiserror::Error;

pub const DATABASE_URL_VAR: &str = "CALENDARIO_DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "CALENDARIO_DB_MAX_CONNECTIONS";
pub const LOG_FILTER_VAR: &str = "CALENDARIO_LOG";

const DEFAULT_DATABASE_URL: &str = "sqlite:calendarios.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("CALENDARIO_DB_MAX_CONNECTIONS must be a positive integer, got {0:?}")]
    InvalidMaxConnections(String),
    #[error("CALENDARIO_DATABASE_URL cannot be empty")]
    EmptyDatabaseUrl,
}

/// Runtime settings for the backend
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BackendConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(DATABASE_URL_VAR) {
            if url.trim().is_empty() {
                return Err(ConfigError::EmptyDatabaseUrl);
            }
            config.database_url = url;
        }

        if let Some(raw) = lookup(MAX_CONNECTIONS_VAR) {
            config.max_connections = match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxConnections(raw)),
            };
        }

        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
