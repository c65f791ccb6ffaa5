use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EducationDetail {
    pub degree: String,
    pub institute: String,
    pub passing_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectDetail {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExperienceDetail {
    pub company: String,
    pub role: String,
    pub duration: String,
}

/// Student profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StudentProfile {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub age: Option<i32>,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub preferred_job_role: Option<String>,
    pub experience_level: Option<String>,
    pub resume_path: Option<String>,
    pub city_state: Option<String>,
    pub education_details: Vec<EducationDetail>,
    pub projects: Vec<ProjectDetail>,
    pub experience_details: Vec<ExperienceDetail>,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub fresher_status: Option<String>,
    pub availability: Option<String>,
    pub work_authorization: Option<String>,
    pub expected_salary: Option<String>,
}

impl StudentProfile {
    pub fn has_resume(&self) -> bool {
        self.resume_path.as_deref().is_some_and(|p| !p.is_empty())
    }
}
