//! # Fluxmon - Containment Stability Console
//!
//! The main binary for the Fluxmon stability tracker.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              apps/fluxmon (THE BINARY)           │
//! │                                                  │
//! │   ┌─────────────┐        ┌──────────────────┐    │
//! │   │    CLI      │        │     Console      │    │
//! │   │   (clap)    │        │  (menu loop)     │    │
//! │   └──────┬──────┘        └────────┬─────────┘    │
//! │          │                        │              │
//! │          └───────────┬────────────┘              │
//! │                      ▼                           │
//! │              ┌───────────────┐                   │
//! │              │ fluxmon-core  │                   │
//! │              │  (THE LOGIC)  │                   │
//! │              └───────────────┘                   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive console (the default)
//! fluxmon
//! fluxmon console
//!
//! # Scripted walkthrough
//! fluxmon demo
//! fluxmon demo --json
//! ```

use clap::Parser;
use fluxmon::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — FLUXMON_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("FLUXMON_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fluxmon=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Fluxmon startup banner.
fn print_banner() {
    println!(
        r#"
  ███████╗██╗     ██╗   ██╗██╗  ██╗███╗   ███╗ ██████╗ ███╗   ██╗
  ██╔════╝██║     ██║   ██║╚██╗██╔╝████╗ ████║██╔═══██╗████╗  ██║
  █████╗  ██║     ██║   ██║ ╚███╔╝ ██╔████╔██║██║   ██║██╔██╗ ██║
  ██╔══╝  ██║     ██║   ██║ ██╔██╗ ██║╚██╔╝██║██║   ██║██║╚██╗██║
  ██║     ███████╗╚██████╔╝██╔╝ ██╗██║ ╚═╝ ██║╚██████╔╝██║ ╚████║
  ╚═╝     ╚══════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝     ╚═╝ ╚═════╝ ╚═╝  ╚═══╝

  Containment Stability Console v{}

  Bounded • Classified • Clamped
"#,
        env!("CARGO_PKG_VERSION")
    );
}
