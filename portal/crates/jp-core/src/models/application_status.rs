use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Review state of a job application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Shortlisted,
    Rejected,
    Viewed,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Shortlisted => "shortlisted",
            Self::Rejected => "rejected",
            Self::Viewed => "viewed",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "shortlisted" => Ok(Self::Shortlisted),
            "rejected" => Ok(Self::Rejected),
            "viewed" => Ok(Self::Viewed),
            _ => Err(CoreError::InvalidApplicationStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
