use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use jp_core::CoreError;
use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";
pub const PROFILE_LOAD_MESSAGE: &str = "Login successful but failed to load profile.";
pub const DECODE_ERROR_MESSAGE: &str = "Unexpected response from server.";

/// Failure of a backend call or of the client-side checks around it.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connect, timeout or body-read failure. Safe to retry.
    #[error("Network error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be built (bad URL, invalid header or MIME type).
    #[error("Request error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Backend rejected one or more fields; `messages` keeps backend order.
    #[error("Validation failed ({status}): {message} {location}")]
    Validation {
        status: u16,
        message: String,
        messages: Vec<String>,
        location: ErrorLocation,
    },

    /// HTTP 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Any other non-2xx response
    #[error("API error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// Form or file rejected before any network call
    #[error("Invalid input: {source}")]
    Input {
        #[source]
        source: CoreError,
    },

    #[error("{PROFILE_LOAD_MESSAGE} {location}")]
    ProfileLoad {
        location: ErrorLocation,
        #[source]
        source: Box<ClientError>,
    },

    #[error("Token store error at {path}: {source} {location}")]
    TokenStore {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_builder() {
            ClientError::Request {
                message: err.to_string(),
                location,
                source: err,
            }
        } else {
            ClientError::Transport {
                message: err.to_string(),
                location,
                source: err,
            }
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ClientError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(status: u16, messages: Vec<String>) -> Self {
        ClientError::Validation {
            status,
            message: messages.join(", "),
            messages,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_load(source: ClientError) -> Self {
        ClientError::ProfileLoad {
            location: ErrorLocation::from(Location::caller()),
            source: Box::new(source),
        }
    }

    #[track_caller]
    pub fn token_store(path: PathBuf, source: std::io::Error) -> Self {
        ClientError::TokenStore {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Whether this error is recoverable via retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status of a backend rejection, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    /// Text to show the user, without source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { .. } => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Request { message, .. } => message.clone(),
            Self::Validation { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Api { message, .. } => message.clone(),
            Self::Decode { .. } => DECODE_ERROR_MESSAGE.to_string(),
            Self::Input { source } => source.message(),
            Self::ProfileLoad { .. } => PROFILE_LOAD_MESSAGE.to_string(),
            Self::TokenStore { path, .. } => {
                format!("Unable to access saved session at {}", path.display())
            }
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    fn from(source: CoreError) -> Self {
        ClientError::Input { source }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
