use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "jobportal")]
#[command(about = "Student/teacher job portal client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL, overrides api.base_url (e.g., http://127.0.0.1:8000)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
