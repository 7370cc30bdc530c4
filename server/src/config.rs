//! Server configuration read from environment variables.
//!
//! | Variable | Default | |
//! |---|---|---|
//! | `TODO_HOST` | `127.0.0.1` | bind address |
//! | `PORT` | `8080` | bind port |
//! | `LOG_FORMAT` | `pretty` | `json` or `pretty` |
//! | `MALFORMED_PAYLOAD` | `reject` | `reject` or `silent` |

use std::str::FromStr;

use thiserror::Error;

use crate::observability::LogFormat;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// How `POST /todos` answers a body that does not decode into a todo.
///
/// The collection is never modified in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadPolicy {
    /// 400 with a JSON `message` describing the decode failure.
    #[default]
    Reject,
    /// 400 with an empty body.
    Silent,
}

impl FromStr for PayloadPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "silent" => Ok(Self::Silent),
            other => Err(ConfigError::InvalidPayloadPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),

    #[error("MALFORMED_PAYLOAD must be \"reject\" or \"silent\", got {0:?}")]
    InvalidPayloadPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub payload_policy: PayloadPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
            payload_policy: PayloadPolicy::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let payload_policy = match lookup("MALFORMED_PAYLOAD") {
            Some(raw) => raw.parse()?,
            None => defaults.payload_policy,
        };

        Ok(Self {
            host: lookup("TODO_HOST").unwrap_or(defaults.host),
            port,
            log_format: lookup("LOG_FORMAT")
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or(defaults.log_format),
            payload_policy,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
