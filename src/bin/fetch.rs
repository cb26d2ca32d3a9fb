//! One-shot terminal renderer for the hotel list.
//!
//! Performs a single load (token request, then hotel list request) with the
//! same configuration as the server and prints the result.
//!
//! # Usage
//!
//! ```bash
//! # Print "name - city" lines
//! cargo run --bin hotels-fetch
//!
//! # Print the view state as JSON
//! cargo run --bin hotels-fetch -- --json
//!
//! # Show upstream request logs on stderr
//! cargo run --bin hotels-fetch -- --verbose
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see `hotel_portal::config`.
//!
//! Exits with status 1 when the hotel list could not be loaded.

use hotel_portal::application::controller::{LoadPhase, ViewState};
use hotel_portal::{config, logging, state::AppState};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process::ExitCode;

/// Loads the hotel list once and prints it.
#[derive(Parser)]
#[command(name = "hotels-fetch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the view state as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log upstream requests at debug level, overriding `RUST_LOG`
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    logging::init(log_filter(cli.verbose, &config.log_level), &config.log_format);

    let state = AppState::from_config(&config)?;
    let view = state.controller.mount().await;

    if cli.json {
        let json = serde_json::to_string_pretty(&view).context("Failed to serialize view state")?;
        println!("{}", json);
    } else {
        print_view(&view);
    }

    Ok(match view.phase {
        LoadPhase::Errored => ExitCode::FAILURE,
        LoadPhase::Loaded | LoadPhase::Pending => ExitCode::SUCCESS,
    })
}

/// `RUST_LOG` unless `--verbose` asks for debug output from this crate.
fn log_filter(verbose: bool, configured: &str) -> &str {
    if verbose { "hotel_portal=debug" } else { configured }
}

/// Prints the heading, the error in red, then one line per hotel.
fn print_view(view: &ViewState) {
    println!("{}", "🏨 Hotel List".bright_blue().bold());
    println!();

    if let Some(error) = &view.error {
        println!("{}", error.red().bold());
        return;
    }

    if view.hotels.is_empty() {
        println!("{}", "No hotels.".yellow());
        return;
    }

    for line in view.lines() {
        println!("  • {}", line);
    }
}
