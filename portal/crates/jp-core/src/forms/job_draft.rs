use crate::forms::require;
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// New job posting, teacher role only
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub required_skills: Vec<String>,
    pub experience_level: String,
}

impl JobDraft {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require("Title", &self.title)?;
        require("Description", &self.description)?;
        require("Company", &self.company)?;
        require("Experience level", &self.experience_level)?;

        if self.required_skills.iter().all(|s| s.trim().is_empty()) {
            return Err(CoreError::validation(
                "At least one required skill is needed",
            ));
        }
        Ok(())
    }
}
