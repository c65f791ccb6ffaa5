use crate::ApplicationStatus;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeUploadReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub resume_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateReceipt {
    #[serde(default)]
    pub message: String,
    pub application_id: i64,
    pub new_status: ApplicationStatus,
}

/// Plain `{"message": ...}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Ack {
    pub message: String,
}
