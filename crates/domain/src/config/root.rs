use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{ResolverConfig, DEFAULT_DNS_PORT};
use std::net::{IpAddr, SocketAddr};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub resolver: ResolverConfig,
    pub logging: LoggingConfig,
}

/// Values taken from the command line; `None` keeps the default.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub nameserver: Option<IpAddr>,
    pub port: Option<u16>,
    pub query_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(ip) = overrides.nameserver {
            let port = overrides.port.unwrap_or(DEFAULT_DNS_PORT);
            self.resolver.nameservers = vec![SocketAddr::new(ip, port)];
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level.to_lowercase();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.nameservers.is_empty() {
            return Err(ConfigError::NoNameserver);
        }
        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }
        Ok(())
    }
}
