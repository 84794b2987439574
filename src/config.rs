//! Runtime configuration read from the environment.
//!
//! | Variable      | Default   |
//! |---------------|-----------|
//! | `APP_HOST`    | `0.0.0.0` |
//! | `APP_PORT`    | `8080`    |
//! | `APP_VARIANT` | `classic` |
//! | `LOG_FORMAT`  | `pretty`  |

use std::net::{IpAddr, SocketAddr};

use crate::logger::LogFormat;
use crate::models::{UnknownVariant, Variant};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_HOST is not a valid IP address: {0:?}")]
    InvalidHost(String),

    #[error("APP_PORT is not a valid port number: {0:?}")]
    InvalidPort(String),

    #[error("APP_VARIANT: {0}")]
    InvalidVariant(#[from] UnknownVariant),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub variant: Variant,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            variant: Variant::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing keys take their defaults; present but malformed values are errors,
    /// except `LOG_FORMAT`, which falls back to pretty output.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host.clone()))?;

        let port: u16 = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let variant = match lookup("APP_VARIANT") {
            Some(raw) => raw.parse()?,
            None => Variant::default(),
        };

        let log_format = lookup("LOG_FORMAT")
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            variant,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
