use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_PATH, DEFAULT_TOKEN_FILE};

use std::path::Path;

use serde::Deserialize;

/// Where the bearer token is persisted between runs and how identity is fetched
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// File name relative to the config directory
    pub token_file: String,
    /// Endpoint below the API root that returns the current user
    pub identity_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_file: String::from(DEFAULT_TOKEN_FILE),
            identity_path: String::from(DEFAULT_IDENTITY_PATH),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_file.trim().is_empty() {
            return Err(ConfigError::session("session.token_file cannot be empty"));
        }

        if Path::new(&self.token_file).is_absolute() || self.token_file.contains("..") {
            return Err(ConfigError::session(
                "session.token_file must be relative and cannot contain '..'",
            ));
        }

        if !self.identity_path.starts_with('/') {
            return Err(ConfigError::session(format!(
                "session.identity_path must start with '/', got '{}'",
                self.identity_path
            )));
        }

        Ok(())
    }
}
