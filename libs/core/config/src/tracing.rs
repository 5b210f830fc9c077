use crate::{env_or_default, ConfigError, Environment, FromEnv};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Log verbosity accepted in `LOG_LEVEL`.
///
/// `fatal` is accepted for compatibility and filters like `error`; tracing has
/// no level above it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Directive usable in an `EnvFilter`.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "error",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            other => Err(format!(
                "unsupported log level {other:?} (expected debug, info, warn, error or fatal)"
            )),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub environment: Environment,
}

impl FromEnv for LogConfig {
    /// - LOG_LEVEL: debug | info | warn | error | fatal (default: info)
    /// - APP_ENV: production selects JSON output
    fn from_env() -> Result<Self, ConfigError> {
        let level = env_or_default("LOG_LEVEL", LogLevel::default().as_str())
            .parse()
            .map_err(|e: String| ConfigError::invalid("LOG_LEVEL", e))?;

        Ok(Self {
            level,
            environment: Environment::from_env(),
        })
    }
}

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", level.filter_directive())))
}

/// Initialize tracing with environment-aware formatting and error span capture.
///
/// - **Production** (`APP_ENV=production`): flattened JSON, one object per line.
/// - **Development** (default): pretty, human-readable output.
///
/// `RUST_LOG`, when set, replaces the filter derived from `LOG_LEVEL`.
///
/// Safe to call multiple times; later calls are no-ops (common in tests).
pub fn init_tracing(config: &LogConfig) {
    let filter = build_filter(config.level);

    let result = if config.environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(
                level = %config.level,
                environment = ?config.environment,
                "tracing initialized"
            );
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}
