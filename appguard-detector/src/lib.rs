//! Installed-application detection with bounded-staleness caching.
//!
//! The detector probes a registry of URL-scheme addresses through an
//! injected [`SchemeHandlerProvider`] and reports which watched
//! applications are present, in a fixed display order. Results are cached
//! for a short window so a polling caller does not repeat the relatively
//! expensive host queries on every tick.
//!
//! The detector is pull-based: it never schedules its own polling, and it
//! holds no state beyond the in-memory result cache.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;
use url::Url;

use appguard_platform::SchemeHandlerProvider;

pub mod registry;

pub use registry::AppRegistry;

#[cfg(test)]
mod tests;

/// Default result-cache lifetime, tuned for a ~1 s polling caller.
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(1);

struct CacheEntry {
    result: Vec<String>,
    captured_at: Instant,
}

/// Detects which watched applications are installed on the host.
///
/// Construct one instance and keep it for the lifetime of the caller; the
/// cache lives inside the instance, so a fresh `Detector` per query
/// defeats it.
pub struct Detector {
    registry: AppRegistry,
    display_order: Vec<String>,
    handlers: Arc<dyn SchemeHandlerProvider>,
    cache_timeout: Duration,
    cache: Mutex<Option<CacheEntry>>,
}

impl Detector {
    pub fn new(
        registry: AppRegistry,
        display_order: Vec<String>,
        handlers: Arc<dyn SchemeHandlerProvider>,
    ) -> Self {
        Self {
            registry,
            display_order,
            handlers,
            cache_timeout: DEFAULT_CACHE_TIMEOUT,
            cache: Mutex::new(None),
        }
    }

    /// Override the cache lifetime. `Duration::ZERO` disables caching.
    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = timeout;
        self
    }

    /// Which watched applications are currently installed, in display order.
    ///
    /// Serves the cached result while it is younger than the cache timeout;
    /// otherwise probes every registry entry and overwrites the cache. The
    /// returned list is a subsequence of the display order with no
    /// duplicates, and may be up to one cache lifetime stale.
    pub fn installed_apps(&self) -> Vec<String> {
        // Lock across check-probe-store so concurrent callers cannot
        // interleave a double probe or a torn overwrite.
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(entry) = cache.as_ref() {
            if entry.captured_at.elapsed() < self.cache_timeout {
                debug!(apps = entry.result.len(), "Serving detection result from cache");
                return entry.result.clone();
            }
        }

        let result = self.probe_all();
        *cache = Some(CacheEntry {
            result: result.clone(),
            captured_at: Instant::now(),
        });
        result
    }

    /// Whether at least one watched application is installed.
    ///
    /// Shares the result cache with [`Detector::installed_apps`]; calling
    /// both inside one cache window costs a single probe sweep.
    pub fn has_conflicting_apps(&self) -> bool {
        !self.installed_apps().is_empty()
    }

    /// Probe every registry entry and order the findings for display.
    fn probe_all(&self) -> Vec<String> {
        let mut found: HashSet<&str> = HashSet::new();

        for (name, probes) in self.registry.iter() {
            for probe in probes {
                let url = match Url::parse(probe) {
                    Ok(url) => url,
                    Err(err) => {
                        debug!(probe, %err, "Skipping malformed probe address");
                        continue;
                    }
                };

                match self.handlers.can_handle(&url) {
                    Ok(true) => {
                        debug!(app = name, probe, "Found installed handler");
                        found.insert(name);
                        break; // remaining alternatives can't change the result
                    }
                    Ok(false) => {}
                    Err(err) => {
                        debug!(probe, %err, "Handler query failed, treating as not handled");
                    }
                }
            }
        }

        // Discovery order is registry order; display order wins. Names
        // missing from the display order are dropped.
        self.display_order
            .iter()
            .filter(|name| found.contains(name.as_str()))
            .cloned()
            .collect()
    }
}
