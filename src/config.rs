// src/config.rs
use std::time::Duration;

use crate::error::{ChatError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_URL_VAR: &str = "UNIQUEST_API_URL";
pub const TIMEOUT_VAR: &str = "UNIQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl Config {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            request_timeout: None,
        }
    }

    pub fn with_api_url(self, api_url: impl Into<String>) -> Self {
        Self {
            request_timeout: self.request_timeout,
            ..Self::new(api_url)
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(API_URL_VAR) {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        };

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ChatError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.api_url)
    }
}
