pub mod error;
pub mod forms;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use forms::chat_message::ChatMessage;
pub use forms::forgot_password_form::ForgotPasswordForm;
pub use forms::job_draft::JobDraft;
pub use forms::profile_update::ProfileUpdate;
pub use forms::register_form::RegisterForm;
pub use forms::reset_password_form::ResetPasswordForm;
pub use forms::resume_upload::{PDF_MIME, ResumeUpload};
pub use forms::status_change::StatusChange;
pub use forms::{MIN_PASSWORD_LENGTH, parse_list};
pub use models::application::Application;
pub use models::application_status::ApplicationStatus;
pub use models::chat_reply::ChatReply;
pub use models::credentials::Credentials;
pub use models::job::Job;
pub use models::job_applicant::JobApplicant;
pub use models::my_application::MyApplication;
pub use models::receipts::{Ack, ResumeUploadReceipt, StatusUpdateReceipt};
pub use models::resume_analysis::{CourseRecommendation, ResumeAnalysis};
pub use models::role::Role;
pub use models::student_profile::{
    EducationDetail, ExperienceDetail, ProjectDetail, StudentProfile,
};
pub use models::token_response::TokenResponse;
pub use models::user::User;
