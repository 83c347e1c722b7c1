use std::net::IpAddr;

use super::dns::{DnsConfig, MAX_ALLOWED_DEPTH};
use super::errors::ConfigError;
use super::logging::LoggingConfig;

/// Effective runtime configuration for dnspect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Query and trace settings
    pub dns: DnsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Build the configuration from defaults and command-line overrides
    ///
    /// There is no configuration file; every setting either keeps its
    /// default or comes from the command line.
    pub fn load(cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_cli_overrides(cli_overrides)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(timeout) = overrides.timeout_secs {
            self.dns.query_timeout_secs = timeout;
        }
        if let Some(depth) = overrides.max_depth {
            self.dns.max_depth = depth;
        }
        if let Some(port) = overrides.port {
            self.dns.port = port;
        }
        if !overrides.nameservers.is_empty() {
            self.dns.nameservers = overrides
                .nameservers
                .iter()
                .map(|ns| {
                    ns.trim()
                        .parse::<IpAddr>()
                        .map_err(|_| ConfigError::InvalidValue("nameserver", ns.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.query_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be at least 1 second".to_string(),
            ));
        }

        if self.dns.max_depth == 0 || self.dns.max_depth > MAX_ALLOWED_DEPTH {
            return Err(ConfigError::Validation(format!(
                "Max depth must be between 1 and {}",
                MAX_ALLOWED_DEPTH
            )));
        }

        if self.dns.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if !self.logging.is_valid_level() {
            return Err(ConfigError::InvalidValue(
                "log level",
                self.logging.level.clone(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub timeout_secs: Option<u64>,
    pub max_depth: Option<usize>,
    pub port: Option<u16>,
    pub nameservers: Vec<String>,
    pub log_level: Option<String>,
}
