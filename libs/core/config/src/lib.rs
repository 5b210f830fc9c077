pub mod duration;
pub mod server;
pub mod tracing;

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub use duration::parse_duration;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },

    #[error("Invalid value for '{key}': {details}")]
    InvalidValue { key: String, details: String },
}

impl ConfigError {
    pub fn parse(key: &str, details: impl ToString) -> Self {
        Self::ParseError {
            key: key.to_string(),
            details: details.to_string(),
        }
    }

    pub fn invalid(key: &str, details: impl ToString) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            details: details.to_string(),
        }
    }
}

/// Application environment, selects the log format
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Load `.env` from the working directory if one exists.
///
/// Values already present in the process environment win. Returns whether a
/// file was loaded.
pub fn load_dotenv() -> bool {
    dotenv::dotenv().is_ok()
}

/// Read an environment variable, treating unset and empty the same way.
pub fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Helper to load and parse environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(key.to_string())),
    }
}

/// Parse an environment variable with `FromStr`, falling back to `default`.
pub fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) if !value.is_empty() => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::parse(key, e)),
        _ => Ok(default),
    }
}

/// Parse a duration variable (`10s`, `5m`, `1h30m`), falling back to `default`.
pub fn env_duration_or(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => {
            parse_duration(value.trim()).map_err(|e| ConfigError::parse(key, e))
        }
        _ => Ok(default),
    }
}

/// Parse a TCP port, rejecting 0.
pub fn env_port_or(key: &str, default: u16) -> Result<u16, ConfigError> {
    let port: u16 = env_parse_or(key, default)?;
    if port == 0 {
        return Err(ConfigError::invalid(key, "port must be between 1 and 65535"));
    }
    Ok(port)
}
