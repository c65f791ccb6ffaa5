use crate::{
    job_commands::JobCommands, profile_commands::ProfileCommands,
    resume_commands::ResumeCommands, teacher_commands::TeacherCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the saved session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Create an account
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        /// student or teacher
        #[arg(long, default_value = "student")]
        role: String,
    },

    /// Email a password reset link
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password using the token from the reset email
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Student profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Resume operations
    Resume {
        #[command(subcommand)]
        action: ResumeCommands,
    },

    /// Browse and apply to jobs
    Jobs {
        #[command(subcommand)]
        action: JobCommands,
    },

    /// Job postings and applicants
    Teacher {
        #[command(subcommand)]
        action: TeacherCommands,
    },

    /// Ask the portal assistant
    Chat {
        message: String,
        /// Continue an earlier conversation
        #[arg(long)]
        session_id: Option<String>,
    },
}
