use std::{env, net::SocketAddr, str::FromStr};

use thiserror::Error;

use super::server_bind_address;

/// Deployment environment, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    /// Returns `true` for environments that want human-readable logs.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Development | Self::Test)
    }

    /// Canonical name used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err(ConfigError::InvalidEnvironment(value.to_string())),
        }
    }
}

/// Process configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub environment: Environment,
}

impl AppConfig {
    /// Reads `APP_ENV` and `APP_BIND_ADDR`, applying defaults for unset values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Development,
        };
        let bind_addr = server_bind_address()?;

        Ok(Self {
            bind_addr,
            environment,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_ENV must be one of 'development', 'production', or 'test' (got {0})")]
    InvalidEnvironment(String),
    #[error("invalid APP_BIND_ADDR value: {0}")]
    BindAddress(#[from] std::net::AddrParseError),
}
