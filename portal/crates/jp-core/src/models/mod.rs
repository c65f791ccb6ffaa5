pub mod application;
pub mod application_status;
pub mod chat_reply;
pub mod credentials;
pub mod job;
pub mod job_applicant;
pub mod my_application;
pub mod receipts;
pub mod resume_analysis;
pub mod role;
pub mod student_profile;
pub mod timestamp;
pub mod token_response;
pub mod user;
