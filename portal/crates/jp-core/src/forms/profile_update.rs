use crate::forms::validate_link;
use crate::{CoreError, EducationDetail, ExperienceDetail, ProjectDetail, Result as CoreErrorResult};

use serde::Serialize;

const MIN_AGE: i32 = 1;
const MAX_AGE: i32 = 120;

/// Partial profile update. Unset fields are left untouched by the backend.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_job_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_details: Option<Vec<EducationDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_details: Option<Vec<ExperienceDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fresher_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_authorization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<String>,
}

impl ProfileUpdate {
    /// Replace skills, trimming entries and dropping blanks
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skills = Some(
            skills
                .into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        );
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.is_empty() {
            return Err(CoreError::validation("Nothing to update"));
        }

        if let Some(age) = self.age
            && !(MIN_AGE..=MAX_AGE).contains(&age)
        {
            return Err(CoreError::validation(format!(
                "Age must be {MIN_AGE}-{MAX_AGE}, got {age}"
            )));
        }

        validate_link("GitHub link", self.github_link.as_deref())?;
        validate_link("LinkedIn link", self.linkedin_link.as_deref())?;

        for edu in self.education_details.iter().flatten() {
            if edu.degree.trim().is_empty() || edu.institute.trim().is_empty() {
                return Err(CoreError::validation(
                    "Education entries need a degree and an institute",
                ));
            }
        }

        for exp in self.experience_details.iter().flatten() {
            if exp.company.trim().is_empty() || exp.role.trim().is_empty() {
                return Err(CoreError::validation(
                    "Experience entries need a company and a role",
                ));
            }
        }

        for project in self.projects.iter().flatten() {
            if project.title.trim().is_empty() {
                return Err(CoreError::validation("Projects need a title"));
            }
            validate_link("Project link", project.link.as_deref())?;
        }

        Ok(())
    }
}
