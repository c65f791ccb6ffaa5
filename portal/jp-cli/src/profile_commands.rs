use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the student profile
    Show,
    /// Update profile fields; omitted fields are left unchanged
    Update {
        #[arg(long)]
        age: Option<i32>,
        #[arg(long)]
        education: Option<String>,
        /// Comma-separated list (e.g., "Rust, SQL")
        #[arg(long)]
        skills: Option<String>,
        #[arg(long)]
        preferred_job_role: Option<String>,
        #[arg(long)]
        experience_level: Option<String>,
        #[arg(long)]
        city_state: Option<String>,
        #[arg(long)]
        github_link: Option<String>,
        #[arg(long)]
        linkedin_link: Option<String>,
        #[arg(long)]
        fresher_status: Option<String>,
        #[arg(long)]
        availability: Option<String>,
        #[arg(long)]
        work_authorization: Option<String>,
        #[arg(long)]
        expected_salary: Option<String>,
    },
}
