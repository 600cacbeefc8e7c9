use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use appguard_core::error::{AppguardError, Result};

/// Persisted setup-flow state.
///
/// Holds what the onboarding flow needs across launches: whether the user
/// finished setup, and whether the blocker extension was enabled the last
/// time anyone recorded it. The extension flag is a record, not a live
/// query against the browser.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SetupState {
    pub setup_completed: bool,
    pub extension_enabled: bool,
}

impl SetupState {
    pub fn load() -> Result<Self> {
        let state_path = Self::state_path()?;
        if !state_path.exists() {
            return Ok(SetupState::default());
        }
        let content = fs::read_to_string(state_path)?;
        serde_json::from_str(&content).map_err(Into::into)
    }

    pub fn save(&self) -> Result<()> {
        let state_path = Self::state_path()?;
        let state_dir = state_path.parent().ok_or_else(|| {
            AppguardError::State("Could not get parent directory for state file".to_string())
        })?;
        fs::create_dir_all(state_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(state_path, content).map_err(Into::into)
    }

    fn state_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| AppguardError::State("Could not get home directory".to_string()))?;
        Ok(home_dir.join(".appguard/state.json"))
    }

    pub fn complete_setup(&mut self) {
        self.setup_completed = true;
    }

    pub fn reset_setup(&mut self) {
        self.setup_completed = false;
    }

    pub fn set_extension_enabled(&mut self, enabled: bool) {
        self.extension_enabled = enabled;
    }
}
