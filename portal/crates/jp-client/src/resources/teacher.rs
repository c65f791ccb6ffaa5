use crate::client::ApiRequest;
use crate::{ClientResult, SessionStore};

use jp_core::{Job, JobApplicant, JobDraft, StatusChange, StatusUpdateReceipt};

impl SessionStore {
    pub async fn posted_jobs(&self) -> ClientResult<Vec<Job>> {
        let request = ApiRequest::get("/teacher/jobs").failure_message("Failed to load jobs");
        self.dispatch(request).await
    }

    pub async fn post_job(&self, draft: &JobDraft) -> ClientResult<Job> {
        draft.validate()?;

        let request = ApiRequest::post("/teacher/jobs")
            .json(draft)?
            .failure_message("Failed to post job");

        self.dispatch(request).await
    }

    pub async fn applicants(&self, job_id: i64) -> ClientResult<Vec<JobApplicant>> {
        let request = ApiRequest::get(format!("/teacher/jobs/{job_id}/applications"))
            .failure_message("Failed to load applicants");
        self.dispatch(request).await
    }

    /// Accept or reject an applicant; status and reason travel as query parameters.
    pub async fn set_application_status(
        &self,
        application_id: i64,
        change: &StatusChange,
    ) -> ClientResult<StatusUpdateReceipt> {
        let request = change.query_pairs().into_iter().fold(
            ApiRequest::patch(format!("/teacher/applications/{application_id}/status")),
            |request, (key, value)| request.query(key, value),
        );

        self.dispatch(request.failure_message("Failed to update status"))
            .await
    }
}
