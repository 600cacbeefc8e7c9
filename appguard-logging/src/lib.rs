//! Tracing subscriber initialization for the appguard binaries.
//!
//! Behavior is driven by environment variables so embedding scripts can
//! reroute diagnostics without a config file:
//! - `LOG_LEVEL`: default filter directive when `RUST_LOG` is unset ("info")
//! - `LOG_FORMAT`: "human" (default) or "json"
//! - `LOG_OUTPUT`: "console" (default, stderr) or "file"
//! - `LOG_FILE_PATH`: target for file output (default /tmp/appguard.log)

use std::{env, path::Path};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{prelude::*, registry, EnvFilter};

/// Initializes the global tracing subscriber based on environment variables.
///
/// Returns a worker guard when file output is active; the caller must hold
/// it for the lifetime of the process or buffered log lines are dropped.
pub fn init_subscriber() -> Option<WorkerGuard> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_output = env::var("LOG_OUTPUT").unwrap_or_else(|_| "console".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "human".to_string());
    let log_file_path =
        env::var("LOG_FILE_PATH").unwrap_or_else(|_| "/tmp/appguard.log".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let is_json = log_format == "json";
    let subscriber = registry().with(env_filter);

    if log_output == "file" {
        let log_path = Path::new(&log_file_path);
        let log_dir = log_path.parent().unwrap_or_else(|| Path::new("/tmp"));
        let log_filename = log_path.file_name().unwrap_or("appguard.log".as_ref());

        let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(non_blocking);
        if is_json {
            subscriber.with(fmt_layer.json()).init();
        } else {
            subscriber.with(fmt_layer.pretty()).init();
        }
        Some(guard)
    } else {
        // Command output owns stdout; diagnostics go to stderr.
        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        if is_json {
            subscriber.with(fmt_layer.json()).init();
        } else {
            subscriber.with(fmt_layer.pretty()).init();
        }
        None
    }
}
