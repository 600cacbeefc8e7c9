// Standard library
use std::process::ExitCode;

// External crates
use clap::Parser;
use tracing::info;

// Internal imports
use appguard_core::guard_error;

// Local modules
mod cli;
mod commands;
mod state;

use cli::Args;
use commands::execute_command;

fn main() -> ExitCode {
    // The appender guard must outlive every log call when file output is on
    let _log_guard = appguard_logging::init_subscriber();

    let args = Args::parse();

    if args.debug {
        info!(command = ?args.command, "Starting appguard");
    }

    match execute_command(args) {
        Ok(code) => code,
        Err(e) => {
            guard_error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
