// abs-metadata - Azure Blockchain Service metadata collector
// Copyright (c) 2025 abs-metadata Contributors
// Licensed under the MIT License

use abs_metadata::cli::{Cli, Commands};
use abs_metadata::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging_config = cli.logging_config();
    let guard = match init_logging(&cli.log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "abs-metadata - Azure Blockchain Service metadata collector"
    );

    // Job failures are reported, not signalled through the exit status
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            0
        }
    };

    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Collect(args) => args.execute().await,
        Commands::Filter(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute().await,
    }
}
