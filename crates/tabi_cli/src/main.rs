//! tabi CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tabi_core::EstimateError;

mod commands;
mod receipt;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose {
        "tabi=debug,tabi_core=debug,warn"
    } else if cli.quiet {
        "error"
    } else {
        "tabi=info,tabi_core=info,warn"
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .try_init();

    let result = match cli.command {
        Commands::Estimate(args) => commands::estimate::execute(args),
        Commands::Destinations(args) => commands::destinations::execute(args),
        Commands::Table(args) => commands::table::execute(args),
        Commands::ValidateTable(args) => commands::validate_table::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<EstimateError>() {
        Some(EstimateError::UnknownDestination(_)) | Some(EstimateError::InvalidCount { .. }) => {
            ExitCodes::INVALID_ARGS
        }
        Some(EstimateError::InvalidTable(_)) => ExitCodes::VALIDATION_FAILURE,
        Some(_) => ExitCodes::GENERAL_ERROR,
        None => {
            let msg = e.to_string().to_lowercase();
            if msg.contains("validation") {
                ExitCodes::VALIDATION_FAILURE
            } else {
                ExitCodes::GENERAL_ERROR
            }
        }
    }
}
