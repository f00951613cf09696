//! Portal configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_API_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_API_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    pub api_base_url: String,
    pub timeouts: ApiTimeouts,
}

impl PortalConfig {
    /// Build typed portal config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORTAL_API_BASE_URL`: backend API root, default `http://127.0.0.1:8080`
    /// - `PORTAL_API_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PORTAL_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. `from_env` delegates here so
    /// tests do not have to mutate the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let api_base_url = lookup("PORTAL_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = ApiTimeouts {
            request_secs: parse_or(
                "PORTAL_API_REQUEST_TIMEOUT_SECS",
                lookup("PORTAL_API_REQUEST_TIMEOUT_SECS"),
                DEFAULT_API_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "PORTAL_API_CONNECT_TIMEOUT_SECS",
                lookup("PORTAL_API_CONNECT_TIMEOUT_SECS"),
                DEFAULT_API_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, api_base_url, timeouts })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
