//! Unix scheme-handler provider (Linux and other freedesktop systems).

use crate::traits::SchemeHandlerProvider;
use anyhow::{bail, Context, Result};
use std::process::Command;
use url::Url;
use which::which;

/// Queries the desktop environment's `x-scheme-handler` registrations.
///
/// Prefers `xdg-settings`; falls back to `gio mime` where xdg-utils is not
/// installed. Both only report handlers the desktop has registered, so a
/// headless host with no handler database reports nothing installed.
pub struct UnixHandlers;

impl UnixHandlers {
    fn query_xdg_settings(scheme: &str) -> Result<bool> {
        let output = Command::new("xdg-settings")
            .args(["get", "default-url-scheme-handler", scheme])
            .output()
            .context("Failed to run xdg-settings")?;

        if !output.status.success() {
            // xdg-settings exits non-zero for schemes nothing is registered for
            return Ok(false);
        }
        let handler = String::from_utf8_lossy(&output.stdout);
        Ok(!handler.trim().is_empty())
    }

    fn query_gio(scheme: &str) -> Result<bool> {
        let mime = format!("x-scheme-handler/{}", scheme);
        let output = Command::new("gio")
            .args(["mime", &mime])
            .output()
            .context("Failed to run gio")?;

        // gio exits non-zero and prints nothing when no handler is registered
        Ok(output.status.success() && !output.stdout.is_empty())
    }
}

impl SchemeHandlerProvider for UnixHandlers {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn can_handle(&self, url: &Url) -> Result<bool> {
        let scheme = url.scheme();

        if which("xdg-settings").is_ok() {
            return Self::query_xdg_settings(scheme);
        }
        if which("gio").is_ok() {
            return Self::query_gio(scheme);
        }

        bail!("No scheme-handler query tool found (tried xdg-settings, gio)")
    }
}
