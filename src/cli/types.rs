//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::check::CheckArgs;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "confab")]
#[command(about = "Configuration tools for the supervised consul agent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a JSON configuration file against the built-in defaults
    Check(CheckArgs),

    /// Print the built-in default configuration
    Defaults,
}
