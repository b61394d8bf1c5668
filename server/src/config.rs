//! Server configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default address the HTTP listener binds to.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default artificial match latency in milliseconds (disabled).
pub const DEFAULT_MATCH_DELAY_MS: u64 = 0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidEnvVar { var: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// Milliseconds to sleep before each match, simulating processing
    /// latency for UI testing. Zero disables the delay. The matching
    /// computation itself is synchronous and instant.
    pub match_delay_ms: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `CROPMATCH_BIND_ADDR`: listen address (default: "0.0.0.0:3000")
    /// - `CROPMATCH_MATCH_DELAY_MS`: artificial match latency in ms (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            env::var("CROPMATCH_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let match_delay_ms = match env::var("CROPMATCH_MATCH_DELAY_MS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
                var: "CROPMATCH_MATCH_DELAY_MS",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_MATCH_DELAY_MS,
        };

        Ok(Self {
            bind_addr,
            match_delay_ms,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            match_delay_ms: DEFAULT_MATCH_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.match_delay_ms, DEFAULT_MATCH_DELAY_MS);
    }

    // Env-var cases share one test because they mutate process state.
    #[test]
    fn test_from_env() {
        env::remove_var("CROPMATCH_BIND_ADDR");
        env::remove_var("CROPMATCH_MATCH_DELAY_MS");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.match_delay_ms, DEFAULT_MATCH_DELAY_MS);

        env::set_var("CROPMATCH_MATCH_DELAY_MS", "500");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.match_delay_ms, 500);

        env::set_var("CROPMATCH_MATCH_DELAY_MS", "half a second");
        assert!(ServerConfig::from_env().is_err());

        env::remove_var("CROPMATCH_MATCH_DELAY_MS");
    }
}
