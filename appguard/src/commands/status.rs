//! `appguard status` — setup state and detection summary.

use std::path::Path;

use anyhow::Result;
use appguard_core::guard_println;
use appguard_platform::HandlerRegistry;

use super::build_detector;
use crate::state::SetupState;

pub fn run(config_path: Option<&Path>) -> Result<()> {
    let (detector, config) = build_detector(config_path)?;
    let state = SetupState::load()?;

    guard_println!(
        "Platform provider:  {}",
        HandlerRegistry::current_provider_name()
    );
    guard_println!("Watchlist source:   {}", config.source_description());
    guard_println!("Watched apps:       {}", config.apps.len());
    guard_println!("Setup completed:    {}", state.setup_completed);
    guard_println!("Extension enabled:  {}", state.extension_enabled);

    let apps = detector.installed_apps();
    if apps.is_empty() {
        guard_println!("Detected now:       none");
    } else {
        guard_println!("Detected now:       {}", apps.join(", "));
    }

    Ok(())
}
