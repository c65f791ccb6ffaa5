use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_PREFIX, DEFAULT_BASE_URL,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, MAX_CONNECT_TIMEOUT_SECS,
    MAX_REQUEST_TIMEOUT_SECS, MIN_CONNECT_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Backend location and transport limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend (e.g., "http://127.0.0.1:8000")
    pub base_url: String,
    /// Versioned API root appended to `base_url`
    pub prefix: String,
    /// Whole-request timeout
    pub request_timeout_secs: u64,
    /// TCP connect timeout
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            prefix: String::from(DEFAULT_API_PREFIX),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Base URL joined with the prefix, without a trailing slash
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.prefix.trim_matches('/');

        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{prefix}")
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::api(format!(
                "api.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if self.connect_timeout_secs < MIN_CONNECT_TIMEOUT_SECS
            || self.connect_timeout_secs > MAX_CONNECT_TIMEOUT_SECS
        {
            return Err(ConfigError::api(format!(
                "api.connect_timeout_secs must be {}-{}, got {}",
                MIN_CONNECT_TIMEOUT_SECS, MAX_CONNECT_TIMEOUT_SECS, self.connect_timeout_secs
            )));
        }

        if self.connect_timeout_secs > self.request_timeout_secs {
            return Err(ConfigError::api(
                "api.connect_timeout_secs cannot exceed api.request_timeout_secs",
            ));
        }

        Ok(())
    }
}
