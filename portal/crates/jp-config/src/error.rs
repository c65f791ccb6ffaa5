use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A value outside its allowed range or shape; `section` is the TOML table.
    #[error("Invalid [{section}] setting: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {path}: {source} {location}")]
    Toml {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: toml::de::Error,
    },

    #[error("Home directory not found; set JP_CONFIG_DIR")]
    NoHomeDir,
}

impl ConfigError {
    #[track_caller]
    fn invalid(section: &'static str, message: String) -> Self {
        ConfigError::Invalid {
            section,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::invalid("api", message.into())
    }

    #[track_caller]
    pub fn session<S: Into<String>>(message: S) -> Self {
        Self::invalid("session", message.into())
    }

    #[track_caller]
    pub fn retry<S: Into<String>>(message: S) -> Self {
        Self::invalid("retry", message.into())
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        ConfigError::Io {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn toml(path: PathBuf, source: toml::de::Error) -> Self {
        ConfigError::Toml {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Config section the error refers to, if it is a validation failure
    pub fn section(&self) -> Option<&'static str> {
        match self {
            ConfigError::Invalid { section, .. } => Some(section),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
