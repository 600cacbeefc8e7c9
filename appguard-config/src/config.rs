//! Serde model for the watchlist configuration file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CACHE_TIMEOUT_MS: u64 = 1_000;

/// Watchlist configuration.
///
/// `apps` maps canonical display names to probe-address alternatives and
/// preserves file order, which is the order applications are probed in.
/// `display_order` is the presentation order; names absent from it are
/// never reported. An empty config is valid and detects nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default)]
    pub apps: IndexMap<String, Vec<String>>,

    #[serde(default)]
    pub display_order: Vec<String>,

    /// How long a detection result may be served from cache, in
    /// milliseconds. Zero disables caching.
    #[serde(default = "default_cache_timeout_ms")]
    pub cache_timeout_ms: u64,

    /// Where this config was loaded from (unset for the built-in watchlist).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

fn default_cache_timeout_ms() -> u64 {
    DEFAULT_CACHE_TIMEOUT_MS
}

impl Default for WatchConfig {
    fn default() -> Self {
        crate::presets::default_watchlist()
    }
}

impl WatchConfig {
    pub fn cache_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_timeout_ms)
    }

    /// Human-readable description of where the watchlist came from.
    pub fn source_description(&self) -> String {
        match &self.source_path {
            Some(path) => path.display().to_string(),
            None => "built-in watchlist".to_string(),
        }
    }
}
