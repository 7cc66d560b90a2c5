use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// `settings.toml` inside the platform config directory, when one exists.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "BirthdayClock", "BirthdayClock")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

/// Reads and writes the settings file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings
    pub fn get(&self) -> Result<Settings> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    /// Write settings, creating the directory if needed
    pub fn update(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Load settings, never failing. A missing file is created with the
    /// defaults so there is something to edit; a broken one is left alone.
    pub fn load_or_default(&self) -> Settings {
        if !self.path.exists() {
            let settings = Settings::default();
            match self.update(&settings) {
                Ok(()) => log::info!("Wrote default settings to {}", self.path.display()),
                Err(e) => log::warn!("Could not write default settings: {:#}", e),
            }
            return settings;
        }

        match self.get() {
            Ok(settings) => {
                log::info!("Loaded settings from {}", self.path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {:#}", e);
                Settings::default()
            }
        }
    }
}
