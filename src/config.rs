// src/config.rs
use std::{fmt, net::SocketAddr, time::Duration};

use axum::http::HeaderValue;
use thiserror::Error;

use crate::persona::DEFAULT_MODEL;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "https://digitalfarm-risv5mxsy-sunil-dass-projects.vercel.app",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("FARMCARE_BIND_ADDR is not a socket address: {value}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("GEMINI_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),
    #[error("wildcard CORS origin cannot be combined with credentials")]
    WildcardOrigin,
}

/// Settings for the generation client. Shared by the server and the console.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_blank(&lookup, key);

        let request_timeout = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key: get("GEMINI_API_KEY"),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("GEMINI_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            request_timeout,
        })
    }
}

/// Full server configuration: generation settings plus HTTP listener and CORS.
#[derive(Clone, Debug)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    /// Read the process environment. Binaries load `.env` before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini = GeminiConfig::from_lookup(&lookup)?;
        let get = |key: &str| non_blank(&lookup, key);

        let bind_raw = get("FARMCARE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value: bind_raw.clone(), source })?;

        let allowed_origins = match get("FARMCARE_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(raw.split(','))?,
            None => parse_origins(DEFAULT_ALLOWED_ORIGINS.iter().copied())?,
        };

        Ok(Self { gemini, bind_addr, allowed_origins })
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Browsers send `Origin` without a trailing slash, so strip it here.
fn parse_origins<'a>(raw: impl Iterator<Item = &'a str>) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| {
            let origin = o.trim_end_matches('/');
            if origin == "*" {
                return Err(ConfigError::WildcardOrigin);
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect()
}
