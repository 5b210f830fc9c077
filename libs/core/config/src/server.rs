use crate::{env_duration_or, env_or_default, env_port_or, ConfigError, FromEnv};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Deadline for receiving a request body
    pub read_timeout: Duration,
    /// Deadline for producing a response
    pub write_timeout: Duration,
    pub idle_timeout: Duration,
    /// How long in-flight requests may drain after a shutdown signal
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            ..Self::default()
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with defaults:
    /// - APP_HOST: 0.0.0.0
    /// - APP_PORT: 8080
    /// - APP_READ_TIMEOUT / APP_WRITE_TIMEOUT: 10s
    /// - APP_IDLE_TIMEOUT: 60s
    /// - APP_SHUTDOWN_TIMEOUT: 5s
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: env_or_default("APP_HOST", &defaults.host),
            port: env_port_or("APP_PORT", defaults.port)?,
            read_timeout: env_duration_or("APP_READ_TIMEOUT", defaults.read_timeout)?,
            write_timeout: env_duration_or("APP_WRITE_TIMEOUT", defaults.write_timeout)?,
            idle_timeout: env_duration_or("APP_IDLE_TIMEOUT", defaults.idle_timeout)?,
            shutdown_timeout: env_duration_or("APP_SHUTDOWN_TIMEOUT", defaults.shutdown_timeout)?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
            read_timeout: Duration::from_secs(10),
            write_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(60),
            shutdown_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "APP_HOST",
        "APP_PORT",
        "APP_READ_TIMEOUT",
        "APP_WRITE_TIMEOUT",
        "APP_IDLE_TIMEOUT",
        "APP_SHUTDOWN_TIMEOUT",
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter().map(|key| (*key, None)).collect()
    }

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_vars(unset_all(), || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert_eq!(config.address(), "0.0.0.0:8080");
            assert_eq!(config.read_timeout, Duration::from_secs(10));
            assert_eq!(config.write_timeout, Duration::from_secs(10));
            assert_eq!(config.idle_timeout, Duration::from_secs(60));
            assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
        });
    }

    #[test]
    fn test_server_config_from_env_with_custom_values() {
        temp_env::with_vars(
            [
                ("APP_HOST", Some("127.0.0.1")),
                ("APP_PORT", Some("3000")),
                ("APP_READ_TIMEOUT", Some("15s")),
                ("APP_WRITE_TIMEOUT", Some("500ms")),
                ("APP_IDLE_TIMEOUT", Some("2m")),
                ("APP_SHUTDOWN_TIMEOUT", Some("1s")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:3000");
                assert_eq!(config.read_timeout, Duration::from_secs(15));
                assert_eq!(config.write_timeout, Duration::from_millis(500));
                assert_eq!(config.idle_timeout, Duration::from_secs(120));
                assert_eq!(config.shutdown_timeout, Duration::from_secs(1));
            },
        );
    }

    #[test]
    fn test_server_config_empty_values_use_defaults() {
        temp_env::with_vars([("APP_PORT", Some("")), ("APP_IDLE_TIMEOUT", Some(""))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.port, 8080);
            assert_eq!(config.idle_timeout, Duration::from_secs(60));
        });
    }

    #[test]
    fn test_server_config_from_env_invalid_port() {
        for bad in ["not_a_number", "99999", "0", "-1"] {
            temp_env::with_var("APP_PORT", Some(bad), || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("APP_PORT"), "{bad}: {err}");
            });
        }
    }

    #[test]
    fn test_server_config_from_env_invalid_timeout() {
        temp_env::with_var("APP_READ_TIMEOUT", Some("10"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("APP_READ_TIMEOUT"));
        });
    }

    #[test]
    fn test_server_config_new() {
        let config = ServerConfig::new("192.168.1.1".to_string(), 5000);
        assert_eq!(config.address(), "192.168.1.1:5000");
        assert_eq!(config.write_timeout, Duration::from_secs(10));
    }
}
