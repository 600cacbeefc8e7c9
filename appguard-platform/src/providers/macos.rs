//! macOS scheme-handler provider.

use crate::traits::SchemeHandlerProvider;
use anyhow::{Context, Result};
use std::process::Command;
use url::Url;

/// Scans the LaunchServices handler table for a registered URL scheme.
///
/// Reads the user's `com.apple.launchservices.secure` preferences via
/// `defaults`. Only schemes with an explicit handler binding appear there,
/// which matches the "is a handler installed and registered" question.
pub struct MacOsHandlers;

impl MacOsHandlers {
    fn handler_table() -> Result<String> {
        let output = Command::new("defaults")
            .args([
                "read",
                "com.apple.LaunchServices/com.apple.launchservices.secure",
                "LSHandlers",
            ])
            .output()
            .context("Failed to read the LaunchServices handler table")?;

        if !output.status.success() {
            // Fresh accounts have no LSHandlers array yet
            return Ok(String::new());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl SchemeHandlerProvider for MacOsHandlers {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn can_handle(&self, url: &Url) -> Result<bool> {
        let scheme = url.scheme();
        let table = Self::handler_table()?;

        // defaults prints plist entries as `LSHandlerURLScheme = youtube;`,
        // quoting values that contain dots or dashes.
        let plain = format!("LSHandlerURLScheme = {};", scheme);
        let quoted = format!("LSHandlerURLScheme = \"{}\";", scheme);
        Ok(table.contains(&plain) || table.contains(&quoted))
    }
}
