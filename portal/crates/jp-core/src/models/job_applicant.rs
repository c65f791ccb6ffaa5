use crate::ApplicationStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application as seen by the teacher who posted the job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplicant {
    pub id: i64,
    pub status: ApplicationStatus,
    #[serde(with = "crate::models::timestamp")]
    pub applied_at: DateTime<Utc>,
    pub student_name: String,
    pub student_email: String,
    #[serde(default)]
    pub resume_path: Option<String>,
}
