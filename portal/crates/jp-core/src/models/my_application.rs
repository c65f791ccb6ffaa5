use crate::ApplicationStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application as seen by the student who submitted it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyApplication {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub company: String,
    pub status: ApplicationStatus,
    /// Set by the teacher when rejecting
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(with = "crate::models::timestamp")]
    pub applied_at: DateTime<Utc>,
}
