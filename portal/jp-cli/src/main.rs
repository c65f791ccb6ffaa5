//! jobportal - Job Portal CLI
//!
//! Every subcommand is a screen: it waits for the saved session to be
//! verified, asks the auth guard whether it may run, then prints the
//! backend result as JSON.
//!
//! # Examples
//!
//! ```bash
//! jobportal login --email user@x.com --password secret123
//! jobportal jobs list --pretty
//! jobportal resume upload ./resume.pdf
//! jobportal teacher set-status 12 --status rejected --reason "Position filled"
//! ```

use jp_cli::commands::Commands;
use jp_cli::{Cli, CliResult, logger, run};
use jp_client::{ApiClient, FileTokenStore, SessionStore};
use jp_config::Config;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = execute(cli.command, cli.server).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute(command: Commands, server: Option<String>) -> CliResult<Value> {
    let mut config = Config::load()?;
    if let Some(url) = server {
        config.api.base_url = url;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path(),
        config.logging.colored,
    )?;
    config.log_summary();

    let client = ApiClient::new(&config.api, config.retry.clone())?;
    let tokens = Arc::new(FileTokenStore::new(config.token_path()));
    let store = SessionStore::new(client, tokens)
        .with_identity_path(config.session.identity_path.clone());

    store.initialize().await;
    run(command, &store).await
}
