//! Capability trait for scheme-handler queries.

use anyhow::Result;
use url::Url;

/// Answers whether an installed application handles a URL scheme.
///
/// Implementations must be synchronous, side-effect free, and cheap enough
/// to call in a polling loop. A query failure means "could not determine",
/// not "not installed" — callers decide how to degrade.
pub trait SchemeHandlerProvider: Send + Sync {
    /// Get the provider name (e.g., "unix", "windows", "macos")
    fn name(&self) -> &'static str;

    /// Whether any installed application is registered for `url`'s scheme.
    fn can_handle(&self, url: &Url) -> Result<bool>;
}
