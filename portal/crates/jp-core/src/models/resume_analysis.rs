use serde::{Deserialize, Serialize};

fn default_level() -> String {
    String::from("Beginner")
}

fn default_language() -> String {
    String::from("English")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub skill: String,
    pub course_name: String,
    pub platform: String,
    #[serde(default)]
    pub course_url: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// AI job-fit analysis of the student's resume against one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub job_id: i64,
    pub job_title: String,
    pub match_score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub ai_improvement_suggestions: Vec<String>,
    #[serde(default)]
    pub recommended_courses: Vec<CourseRecommendation>,
}
