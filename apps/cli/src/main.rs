#![forbid(unsafe_code)]

//! Task Manager CLI
//!
//! Lists tasks and sends user actions to the Task Manager API.

mod commands;
mod view;

use anyhow::Result;
use clap::Parser;
use task_client::{DEFAULT_SERVER_URL, TaskClient};
use tracing::error;

use crate::commands::Command;

/// Task Manager Command-Line Interface
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Task Manager API URL
    #[arg(long, env = "TASK_API_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    let client = TaskClient::new(&args.server_url);
    let command = args.command.unwrap_or(Command::List);

    match commands::run(&client, command).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, server_url = %client.server_url(), "Command failed");
            Err(e)
        }
    }
}
