use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TeacherCommands {
    /// Jobs you have posted
    Jobs,
    /// Post a new job
    PostJob {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        location: Option<String>,
        /// Comma-separated required skills
        #[arg(long)]
        skills: String,
        #[arg(long)]
        experience_level: String,
    },
    /// Applicants for one of your jobs
    Applicants { job_id: i64 },
    /// Shortlist, reject or reset an application
    SetStatus {
        application_id: i64,
        /// pending, shortlisted, rejected or viewed
        #[arg(long)]
        status: String,
        #[arg(long)]
        reason: Option<String>,
    },
}
