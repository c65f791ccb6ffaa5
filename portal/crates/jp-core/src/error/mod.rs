use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid application status: {value} {location}")]
    InvalidApplicationStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid resume {file_name}: {message} {location}")]
    InvalidResume {
        file_name: String,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error at caller location
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a resume error at caller location
    #[track_caller]
    pub fn invalid_resume<F: Into<String>, S: Into<String>>(file_name: F, message: S) -> Self {
        CoreError::InvalidResume {
            file_name: file_name.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing next to a form, without source location.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidRole { value, .. } => {
                format!("Role must be 'student' or 'teacher', got '{value}'")
            }
            Self::InvalidApplicationStatus { value, .. } => format!(
                "Status must be one of pending, shortlisted, rejected, viewed, got '{value}'"
            ),
            Self::InvalidResume { message, .. } => message.clone(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
