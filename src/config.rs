//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the portal client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// Override for the registration storage directory
    pub data_dir: Option<String>,
    /// Directory with page-fragment overrides
    pub content_dir: Option<String>,
    /// Treat the phone field as required
    pub phone_required: Option<bool>,
    /// Treat the postal code field as required
    pub postal_code_required: Option<bool>,
}

impl PortalConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "amparo", "amparo-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PortalConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn data_dir_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(PathBuf::from)
    }

    pub fn content_dir_path(&self) -> Option<PathBuf> {
        self.content_dir.as_ref().map(PathBuf::from)
    }
}
