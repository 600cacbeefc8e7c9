// Standard library imports
use std::fs;
use std::path::{Path, PathBuf};

// External crate imports
use anyhow::{Context, Result};
use tracing::debug;

// Internal imports
use crate::config::WatchConfig;
use crate::presets;

/// A loader responsible for finding and loading the `appguard.yaml`
/// watchlist file.
///
/// The loader implements a clear priority chain:
/// 1. **Explicit path:** a `--config` style override, if given.
/// 2. **Current Directory:** `appguard.yaml` in the working directory.
/// 3. **Parent Directories:** walks up the tree looking for `appguard.yaml`.
/// 4. **Global Configuration:** `~/.appguard/config.yaml`.
/// 5. **Built-in watchlist:** the shipped defaults; loading never fails
///    just because no file exists.
#[derive(Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Creates a new `ConfigLoader`.
    pub fn new() -> Self {
        Self
    }

    /// Loads the `WatchConfig` by searching in the prioritized locations.
    pub fn load(&self, explicit: Option<&Path>) -> Result<WatchConfig> {
        if let Some(path) = explicit {
            debug!("Loading config from: {}", path.display());
            return self
                .load_file(path)
                .with_context(|| format!("Failed to load {}", path.display()));
        }

        let local_config = Path::new("appguard.yaml");
        if local_config.exists() {
            debug!("Loading config from: {}", local_config.display());
            return self
                .load_file(local_config)
                .with_context(|| format!("Failed to load {}", local_config.display()));
        }

        if let Some(config_path) = self.find_in_parent_dirs("appguard.yaml")? {
            debug!("Loading config from: {}", config_path.display());
            return self.load_file(&config_path);
        }

        let home_dir = dirs::home_dir().context("Could not find home directory")?;
        let global_config = home_dir.join(".appguard/config.yaml");
        if global_config.exists() {
            debug!("Loading config from: {}", global_config.display());
            return self.load_file(&global_config);
        }

        debug!("No watchlist file found, using built-in watchlist");
        Ok(presets::default_watchlist())
    }

    /// Finds a file by walking up the directory tree from the current directory.
    fn find_in_parent_dirs(&self, filename: &str) -> Result<Option<PathBuf>> {
        let current_dir = std::env::current_dir()?;
        let mut current = current_dir.as_path();

        loop {
            let config_path = current.join(filename);
            if config_path.exists() {
                return Ok(Some(config_path));
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break, // Reached the root
            }
        }

        Ok(None)
    }

    /// Loads and deserializes a `WatchConfig` from a given file path.
    ///
    /// The source path is recorded on the configuration object for
    /// display purposes.
    fn load_file(&self, path: &Path) -> Result<WatchConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file at {}", path.display()))?;

        let mut config: WatchConfig = serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("Invalid watchlist file at {}", path.display()))?;

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }
}
