//! jobportal CLI library
//!
//! Command definitions and the runner, exported for the binary and for tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod job_commands;
pub mod logger;
pub mod profile_commands;
pub mod resume_commands;
pub mod runner;
pub mod teacher_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, NOT_LOGGED_IN_MESSAGE, Result as CliResult};
pub use runner::run;
