use crate::ApplicationStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application record returned when a student applies.
///
/// Applying twice to the same job returns the existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default, with = "crate::models::timestamp::option")]
    pub applied_at: Option<DateTime<Utc>>,
}
