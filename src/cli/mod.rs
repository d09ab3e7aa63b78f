//! Command-line interface for vetty
//!
//! This module provides the main CLI structure and command handling. It uses
//! clap for argument parsing and keeps exit-code policy out of the scan core:
//! the core reports counts, the commands decide what they mean for the
//! process.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// vetty - concurrent decode validation for config file trees
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Walk a directory tree and decode every matching file
    Scan(commands::scan::ScanArgs),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective merged configuration
    Show,
    /// Validate configuration
    Validate,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Scan(args)) => {
                commands::scan::execute(args, self.config.as_deref(), &output).await
            }
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, self.config.as_deref(), &output).await
            }
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
