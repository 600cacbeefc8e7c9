//! Platform-specific scheme-handler providers.

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

#[cfg(target_os = "macos")]
pub mod macos;

// Re-export platform providers
#[cfg(unix)]
pub use unix::UnixHandlers;

#[cfg(windows)]
pub use windows::WindowsHandlers;

#[cfg(target_os = "macos")]
pub use macos::MacOsHandlers;
