//! `appguard setup` — persisted setup-state management.

use anyhow::Result;
use appguard_core::guard_println;

use crate::cli::{SetupSubcommand, Toggle};
use crate::state::SetupState;

pub fn run(command: &SetupSubcommand) -> Result<()> {
    let mut state = SetupState::load()?;

    match command {
        SetupSubcommand::Complete => {
            state.complete_setup();
            state.save()?;
            guard_println!("Setup marked as completed");
        }
        SetupSubcommand::Reset => {
            state.reset_setup();
            state.save()?;
            guard_println!("Setup flow will run again");
        }
        SetupSubcommand::Extension { state: toggle } => {
            state.set_extension_enabled(*toggle == Toggle::On);
            state.save()?;
            guard_println!(
                "Extension recorded as {}",
                if state.extension_enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
        }
    }

    Ok(())
}
