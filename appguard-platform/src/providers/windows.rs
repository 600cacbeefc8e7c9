//! Windows scheme-handler provider.

use crate::traits::SchemeHandlerProvider;
use anyhow::{Context, Result};
use std::process::Command;
use url::Url;

/// Checks the registry for a protocol handler class.
///
/// An installed handler registers `HKEY_CLASSES_ROOT\<scheme>` with a
/// `URL Protocol` marker value; querying that value is side-effect free.
pub struct WindowsHandlers;

impl SchemeHandlerProvider for WindowsHandlers {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn can_handle(&self, url: &Url) -> Result<bool> {
        let scheme = url.scheme();
        let key = format!(r"HKEY_CLASSES_ROOT\{}", scheme);

        let output = Command::new("reg")
            .args(["query", &key, "/v", "URL Protocol"])
            .output()
            .context("Failed to run reg query")?;

        // reg exits non-zero when the key or value does not exist
        Ok(output.status.success())
    }
}
