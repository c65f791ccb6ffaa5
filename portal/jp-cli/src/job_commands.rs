use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// List all open jobs
    List,
    /// Jobs recommended for your profile
    Recommendations,
    /// Apply to a job
    Apply { job_id: i64 },
    /// Your applications and their status
    MyApplications,
    /// AI fit analysis of your resume against a job
    Analyze { job_id: i64 },
}
