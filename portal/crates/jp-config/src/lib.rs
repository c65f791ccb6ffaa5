mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "JP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".jobportal";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_API_PREFIX: &str = "/api/v1";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const MIN_CONNECT_TIMEOUT_SECS: u64 = 1;
const MAX_CONNECT_TIMEOUT_SECS: u64 = 60;

const DEFAULT_TOKEN_FILE: &str = "token";
const DEFAULT_IDENTITY_PATH: &str = "/student/profile";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
