//! Registry for selecting the scheme-handler provider for the current OS.

use crate::traits::SchemeHandlerProvider;
use std::sync::Arc;

#[cfg(target_os = "macos")]
use crate::providers::MacOsHandlers;

#[cfg(windows)]
use crate::providers::WindowsHandlers;

#[cfg(all(unix, not(target_os = "macos")))]
use crate::providers::UnixHandlers;

/// Detects the current platform and creates the matching provider.
pub struct HandlerRegistry;

impl HandlerRegistry {
    /// Get the scheme-handler provider for the current operating system.
    pub fn current() -> Arc<dyn SchemeHandlerProvider> {
        #[cfg(target_os = "macos")]
        return Arc::new(MacOsHandlers);

        #[cfg(windows)]
        return Arc::new(WindowsHandlers);

        #[cfg(all(unix, not(target_os = "macos")))]
        return Arc::new(UnixHandlers);

        #[cfg(not(any(unix, windows)))]
        compile_error!("Unsupported platform - only Unix-like and Windows platforms are supported");
    }

    /// Get the current provider name as a string.
    pub fn current_provider_name() -> &'static str {
        Self::current().name()
    }
}
