// Command handlers

pub mod check;
pub mod scan;
pub mod setup;
pub mod status;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use crate::cli::{Args, Command};
use appguard_config::{ConfigLoader, WatchConfig};
use appguard_detector::{AppRegistry, Detector};

/// Main command dispatcher
pub fn execute_command(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Scan { watch, interval_ms } => {
            debug!("Handling scan command");
            scan::run(args.config.as_deref(), watch, interval_ms)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            debug!("Handling check command");
            check::run(args.config.as_deref())
        }
        Command::Status => {
            debug!("Handling status command");
            status::run(args.config.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Setup { command } => {
            debug!("Handling setup command");
            setup::run(&command)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load the watchlist and wire a detector against the host provider.
///
/// One detector per invocation: it owns the result cache, so commands
/// that query more than once stay within a single probe sweep.
pub(crate) fn build_detector(config_path: Option<&Path>) -> Result<(Detector, WatchConfig)> {
    let config = ConfigLoader::new().load(config_path)?;
    let registry = AppRegistry::from(config.apps.clone());
    let detector = Detector::new(
        registry,
        config.display_order.clone(),
        appguard_platform::current(),
    )
    .with_cache_timeout(config.cache_timeout());
    Ok((detector, config))
}
