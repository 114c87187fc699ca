//! Host configuration parsed from environment variables.

use client::util::config::ApiConfig;

pub const DEFAULT_PORT: u16 = 5173;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 5173
    /// - `USERS_API_BASE_URL`: Users service base URL, default `http://localhost:3000`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api = std::env::var("USERS_API_BASE_URL").map_or_else(|_| ApiConfig::default(), |raw| ApiConfig::new(&raw));
        Ok(Self { port, api })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value: value.to_owned(), source }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
