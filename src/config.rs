use std::env;

use thiserror::Error;

pub const DEFAULT_API_HOST: &str = "localhost";
pub const DEFAULT_API_PORT: u16 = 3000;
pub const DEFAULT_WEB_HOST: &str = "localhost";
pub const DEFAULT_WEB_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a valid port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
}

/// A `host:port` pair for one listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listen {
    pub host: String,
    pub port: u16,
}

impl std::fmt::Display for Listen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Listener addresses for the two servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: Listen,
    pub web: Listen,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Listen {
                host: DEFAULT_API_HOST.to_string(),
                port: DEFAULT_API_PORT,
            },
            web: Listen {
                host: DEFAULT_WEB_HOST.to_string(),
                port: DEFAULT_WEB_PORT,
            },
        }
    }
}

impl Config {
    /// Read `API_HOST`, `API_PORT`, `WEB_HOST` and `WEB_PORT` from the
    /// process environment, falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api: Listen {
                host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
                port: port(&lookup, "API_PORT", DEFAULT_API_PORT)?,
            },
            web: Listen {
                host: lookup("WEB_HOST").unwrap_or_else(|| DEFAULT_WEB_HOST.to_string()),
                port: port(&lookup, "WEB_PORT", DEFAULT_WEB_PORT)?,
            },
        })
    }
}

fn port<F>(lookup: &F, var: &'static str, default: u16) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { var, value }),
    }
}
