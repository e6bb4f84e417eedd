//! # Fluxmon CLI Module
//!
//! ## Available Commands
//!
//! - `console` - Run the interactive containment console (the default)
//! - `demo` - Run the scripted four-object walkthrough

mod commands;

use clap::{Parser, Subcommand};
use fluxmon_core::FluxmonError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Fluxmon - Containment Stability Console
///
/// Tracks named containment objects with bounded stability scores,
/// classifies them into danger bands, and runs capability-gated
/// emergency cooldowns.
#[derive(Parser, Debug)]
#[command(name = "fluxmon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit the final system report in JSON (for programmatic access)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive containment console
    Console,

    /// Run the scripted demo walkthrough
    Demo,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), FluxmonError> {
    match cli.command {
        Some(Commands::Demo) => cmd_demo(cli.json),
        // No subcommand - run the console by default
        Some(Commands::Console) | None => cmd_console(cli.json),
    }
}
