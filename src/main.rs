// regfix - local registry integration-test harness
// Main CLI entry point

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use regfix::cli::{Cli, CliDispatcher};
use regfix::utils::error::UserError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = CliDispatcher::execute(cli.command).await;

    if let Err(err) = result {
        let user_error = UserError::from_harness_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
