use crate::client::ApiRequest;
use crate::{ClientResult, SessionStore};

use jp_core::{PDF_MIME, ProfileUpdate, ResumeUpload, ResumeUploadReceipt, StudentProfile};

const PROFILE_PATH: &str = "/student/profile";

impl SessionStore {
    pub async fn profile(&self) -> ClientResult<StudentProfile> {
        let request = ApiRequest::get(PROFILE_PATH).failure_message("Failed to load profile");
        self.dispatch(request).await
    }

    /// Save profile changes. The cached identity is refreshed afterwards.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<StudentProfile> {
        update.validate()?;

        let request = ApiRequest::put(PROFILE_PATH)
            .json(update)?
            .failure_message("Failed to update profile");

        let profile: StudentProfile = self.dispatch(request).await?;
        if let Err(e) = self.refresh_identity().await {
            log::warn!("Profile saved but identity refresh failed: {e}");
        }
        Ok(profile)
    }

    /// Upload a resume as multipart field `file`.
    ///
    /// The upload was checked when `resume` was built, so a non-PDF never gets here.
    pub async fn upload_resume(&self, resume: ResumeUpload) -> ClientResult<ResumeUploadReceipt> {
        let (file_name, bytes) = resume.into_parts();

        let request = ApiRequest::post("/student/resume")
            .multipart("file", file_name, PDF_MIME, bytes)
            .failure_message("Upload failed");

        self.dispatch(request).await
    }
}
