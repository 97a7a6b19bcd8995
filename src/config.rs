//! Persisted default snapshot options

use crate::snapshot::SnapshotOptions;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration; unset switches fall back to the defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FetchFormConfig {
    /// Keep entries whose value is the empty string
    pub include_empty: Option<bool>,
    /// Keep entries of disabled controls
    pub include_disabled: Option<bool>,
    /// Keep entries of hidden inputs
    pub include_hidden: Option<bool>,
}

impl FetchFormConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "centy", "fetchform")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FetchFormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve into concrete options
    pub fn options(&self) -> SnapshotOptions {
        let defaults = SnapshotOptions::default();
        SnapshotOptions {
            include_empty: self.include_empty.unwrap_or(defaults.include_empty),
            include_disabled: self.include_disabled.unwrap_or(defaults.include_disabled),
            include_hidden: self.include_hidden.unwrap_or(defaults.include_hidden),
        }
    }
}

impl From<SnapshotOptions> for FetchFormConfig {
    fn from(options: SnapshotOptions) -> Self {
        Self {
            include_empty: Some(options.include_empty),
            include_disabled: Some(options.include_disabled),
            include_hidden: Some(options.include_hidden),
        }
    }
}
