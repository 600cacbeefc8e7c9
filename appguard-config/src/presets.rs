//! Built-in watchlist shipped with the tool.

use crate::config::{WatchConfig, DEFAULT_CACHE_TIMEOUT_MS};
use indexmap::IndexMap;

/// The default watched applications and their probe-address alternatives.
///
/// Each application lists every scheme its clients have registered over
/// time; one resolving handler is enough to mark it installed.
pub fn default_watchlist() -> WatchConfig {
    let mut apps = IndexMap::new();
    apps.insert(
        "YouTube".to_string(),
        vec![
            "youtube://".to_string(),
            "vnd.youtube://".to_string(),
            "youtube-app://".to_string(),
            "com.google.ios.youtube://".to_string(),
        ],
    );
    apps.insert(
        "Instagram".to_string(),
        vec![
            "instagram://".to_string(),
            "instagram-stories://".to_string(),
        ],
    );
    apps.insert(
        "TikTok".to_string(),
        vec!["tiktok://".to_string(), "snssdk1233://".to_string()],
    );

    WatchConfig {
        display_order: apps.keys().cloned().collect(),
        apps,
        cache_timeout_ms: DEFAULT_CACHE_TIMEOUT_MS,
        source_path: None,
    }
}
