use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use jp_client::{ClientError, Route};
use jp_config::ConfigError;
use jp_core::{CoreError, Role};
use thiserror::Error;

pub const NOT_LOGGED_IN_MESSAGE: &str = "Not logged in. Run `jobportal login` first.";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Failed to read {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("{NOT_LOGGED_IN_MESSAGE}")]
    NotLoggedIn,

    #[error("Already logged in as {email}.")]
    AlreadyLoggedIn { email: String },

    #[error("{route} is not available to {role} accounts.")]
    WrongRole { route: Route, role: Role },

    #[error("Session is still loading")]
    Pending,
}

impl CliError {
    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message printed after `Error: `
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(e) => e.user_message(),
            Self::Io { path, source, .. } => format!("Failed to read {}: {}", path.display(), source),
            other => other.to_string(),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::Client(ClientError::from(err))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
