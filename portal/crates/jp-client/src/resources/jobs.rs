use crate::client::ApiRequest;
use crate::{ClientResult, SessionStore};

use jp_core::{Application, Job, MyApplication, ResumeAnalysis};

impl SessionStore {
    pub async fn list_jobs(&self) -> ClientResult<Vec<Job>> {
        let request = ApiRequest::get("/jobs").failure_message("Failed to load jobs");
        self.dispatch(request).await
    }

    pub async fn recommended_jobs(&self) -> ClientResult<Vec<Job>> {
        let request =
            ApiRequest::get("/jobs/recommendations").failure_message("Failed to load jobs");
        self.dispatch(request).await
    }

    pub async fn apply(&self, job_id: i64) -> ClientResult<Application> {
        let request = ApiRequest::post(format!("/jobs/{job_id}/apply"))
            .failure_message("Application failed");
        self.dispatch(request).await
    }

    pub async fn my_applications(&self) -> ClientResult<Vec<MyApplication>> {
        let request = ApiRequest::get("/jobs/my-applications")
            .failure_message("Failed to load applications");
        self.dispatch(request).await
    }

    /// AI fit analysis of the uploaded resume against one job
    pub async fn analyze_resume(&self, job_id: i64) -> ClientResult<ResumeAnalysis> {
        let request = ApiRequest::post(format!("/resume-analyzer/analyze/{job_id}"))
            .failure_message("Analysis failed");
        self.dispatch(request).await
    }
}
