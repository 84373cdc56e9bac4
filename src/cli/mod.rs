//! CLI interface and argument parsing

pub mod commands;

use crate::config::LoggingConfig;
use clap::{Parser, Subcommand};

/// Azure Blockchain Service metadata collector and column filter
#[derive(Parser, Debug)]
#[command(name = "abs-metadata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        global = true,
        env = "ABS_LOG_LEVEL",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,

    /// Also write JSON logs to this directory
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    /// Log file rotation
    #[arg(
        long,
        global = true,
        default_value = "daily",
        value_parser = ["daily", "hourly", "never"]
    )]
    pub log_rotation: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Logging configuration selected by the global flags
    pub fn logging_config(&self) -> LoggingConfig {
        match &self.log_dir {
            Some(dir) => LoggingConfig {
                local_rotation: self.log_rotation.clone(),
                ..LoggingConfig::with_directory(dir.clone())
            },
            None => LoggingConfig::console(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect member, node and contract metadata into a workbook
    Collect(commands::collect::CollectArgs),

    /// Keep only the columns marked with Y in a collected workbook
    Filter(commands::filter::FilterArgs),

    /// Validate the credentials file
    ValidateConfig(commands::validate::ValidateArgs),
}
