use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ResumeCommands {
    /// Upload a PDF resume
    Upload { path: PathBuf },
}
