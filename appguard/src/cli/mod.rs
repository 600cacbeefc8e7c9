// CLI argument parsing and definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "appguard")]
#[command(about = "Detects watched applications and tracks blocker setup state")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a custom watchlist configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SetupSubcommand {
    /// Mark the setup flow as completed
    Complete,
    /// Clear the completed flag so the flow runs again
    Reset,
    /// Record whether the blocker extension is currently enabled
    Extension {
        /// New extension state
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Scan for watched applications installed on this host
    Scan {
        /// Keep scanning on an interval until interrupted
        #[arg(long)]
        watch: bool,

        /// Polling interval in milliseconds (with --watch)
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
    /// Exit non-zero if any watched application is installed
    Check,
    /// Show setup state, watchlist source, and current detections
    Status,
    /// Manage the persisted setup state
    Setup {
        #[command(subcommand)]
        command: SetupSubcommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_defaults() {
        let args = Args::parse_from(["appguard", "scan"]);
        match args.command {
            Command::Scan { watch, interval_ms } => {
                assert!(!watch);
                assert_eq!(interval_ms, 1000);
            }
            other => panic!("parsed wrong command: {other:?}"),
        }
    }

    #[test]
    fn test_setup_extension_toggle() {
        let args = Args::parse_from(["appguard", "setup", "extension", "on"]);
        match args.command {
            Command::Setup {
                command: SetupSubcommand::Extension { state },
            } => assert_eq!(state, Toggle::On),
            other => panic!("parsed wrong command: {other:?}"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let args = Args::parse_from(["appguard", "check", "--config", "/tmp/watch.yaml"]);
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("/tmp/watch.yaml")));
    }
}
