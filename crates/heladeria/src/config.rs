//! Runtime configuration, read from `HELADERIA_*` environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `HELADERIA_HOST` | `127.0.0.1` |
//! | `HELADERIA_PORT` | `3000` |
//! | `HELADERIA_MAILBOX_SIZE` | `32` |
//! | `HELADERIA_ENV` | `development` |
//!
//! The binary loads a `.env` file first, if there is one.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Request channel capacity of each actor.
    pub mailbox_size: usize,
    pub environment: Environment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            mailbox_size: 32,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mailbox_size = parse(&lookup, "HELADERIA_MAILBOX_SIZE", defaults.mailbox_size)?;
        if mailbox_size == 0 {
            return Err(ConfigError::Invalid {
                name: "HELADERIA_MAILBOX_SIZE",
                value: "0".to_string(),
            });
        }
        Ok(Self {
            host: lookup("HELADERIA_HOST")
                .filter(|h| !h.is_empty())
                .unwrap_or(defaults.host),
            port: parse(&lookup, "HELADERIA_PORT", defaults.port)?,
            mailbox_size,
            environment: parse(&lookup, "HELADERIA_ENV", defaults.environment)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
