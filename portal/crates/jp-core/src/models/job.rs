use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub experience_level: String,
    pub teacher_id: i64,
    #[serde(with = "crate::models::timestamp")]
    pub created_at: DateTime<Utc>,
}
