//! `appguard check` — conflict predicate with a scriptable exit code.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use appguard_core::guard_println;

use super::build_detector;

pub fn run(config_path: Option<&Path>) -> Result<ExitCode> {
    let (detector, _config) = build_detector(config_path)?;

    // Both queries land in one cache window, so this costs one probe sweep.
    if detector.has_conflicting_apps() {
        let apps = detector.installed_apps();
        guard_println!("Conflicting applications installed: {}", apps.join(", "));
        Ok(ExitCode::from(1))
    } else {
        guard_println!("No conflicting applications installed");
        Ok(ExitCode::SUCCESS)
    }
}
