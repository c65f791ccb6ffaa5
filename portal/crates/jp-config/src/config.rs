use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, LoggingConfig, RetryConfig, SessionConfig,
};

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

/// Client settings: `config.toml` in the config directory, then `JP_*` overrides.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub retry: RetryConfig,
    /// Directory the settings were loaded from; token and relative log paths live here.
    #[serde(skip)]
    dir: PathBuf,
}

impl Config {
    /// Load from [`config_dir`](Self::config_dir), creating it on first run.
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Load `config.toml` from `dir` (defaults when absent), then apply env overrides.
    pub fn load_from(dir: &Path) -> ConfigErrorResult<Self> {
        fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir.to_path_buf(), e))?;

        let path = dir.join(CONFIG_FILE_NAME);
        let mut config = match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).map_err(|e| ConfigError::toml(path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(ConfigError::io(path, e)),
        };

        config.dir = dir.to_path_buf();
        config.apply_env_overrides();
        Ok(config)
    }

    /// `$JP_CONFIG_DIR`, else `~/.jobportal`
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
            _ => dirs::home_dir()
                .map(|home| home.join(DEFAULT_CONFIG_DIR_NAME))
                .ok_or(ConfigError::NoHomeDir),
        }
    }

    /// Check every section; the first failure wins.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.retry.validate()
    }

    /// Directory passed to [`load_from`](Self::load_from); empty for `Config::default()`.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the persisted bearer token, inside [`dir`](Self::dir).
    pub fn token_path(&self) -> PathBuf {
        self.dir.join(&self.session.token_file)
    }

    /// Log file path; relative paths resolve inside [`dir`](Self::dir).
    pub fn log_file_path(&self) -> Option<PathBuf> {
        match self.logging.file.as_deref() {
            None | Some("") => None,
            Some(file) => Some(self.dir.join(file)),
        }
    }

    /// Log the effective settings at info level. The token itself is never read here.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s, connect {}s)",
            self.api.api_root(),
            self.api.request_timeout_secs,
            self.api.connect_timeout_secs
        );
        info!(
            "  session: token_file={}, identity_path={}",
            self.session.token_file, self.session.identity_path
        );
        info!(
            "  logging: {} -> {} (colored: {})",
            *self.logging.level,
            self.logging.file.as_deref().unwrap_or("stderr"),
            self.logging.colored
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x, jitter={}",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier,
            self.retry.jitter
        );
    }

    fn apply_env_overrides(&mut self) {
        let api = &mut self.api;
        override_string("JP_API_BASE_URL", &mut api.base_url);
        override_string("JP_API_PREFIX", &mut api.prefix);
        override_parsed("JP_API_REQUEST_TIMEOUT_SECS", &mut api.request_timeout_secs);
        override_parsed("JP_API_CONNECT_TIMEOUT_SECS", &mut api.connect_timeout_secs);

        let session = &mut self.session;
        override_string("JP_SESSION_TOKEN_FILE", &mut session.token_file);
        override_string("JP_SESSION_IDENTITY_PATH", &mut session.identity_path);

        let logging = &mut self.logging;
        override_parsed("JP_LOG_LEVEL", &mut logging.level);
        override_flag("JP_LOG_COLORED", &mut logging.colored);
        if let Ok(file) = env::var("JP_LOG_FILE") {
            logging.file = Some(file);
        }

        let retry = &mut self.retry;
        override_parsed("JP_RETRY_MAX_ATTEMPTS", &mut retry.max_attempts);
        override_parsed("JP_RETRY_INITIAL_DELAY_MS", &mut retry.initial_delay_ms);
        override_parsed("JP_RETRY_MAX_DELAY_SECS", &mut retry.max_delay_secs);
        override_parsed("JP_RETRY_BACKOFF_MULTIPLIER", &mut retry.backoff_multiplier);
        override_flag("JP_RETRY_JITTER", &mut retry.jitter);
    }
}

fn override_string(var: &str, target: &mut String) {
    if let Ok(value) = env::var(var) {
        *target = value;
    }
}

/// "true" and "1" enable; anything else disables
fn override_flag(var: &str, target: &mut bool) {
    if let Ok(value) = env::var(var) {
        *target = matches!(value.as_str(), "true" | "1");
    }
}

/// Unparseable values are ignored and the loaded value kept
fn override_parsed<T: FromStr>(var: &str, target: &mut T) {
    if let Some(parsed) = env::var(var).ok().and_then(|value| value.parse().ok()) {
        *target = parsed;
    }
}
