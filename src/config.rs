//! Configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Presence configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresenceConfig {
    /// Discord application id used for the IPC handshake
    #[serde(default = "default_application_id")]
    pub application_id: String,
    /// Asset key used when an update sets no large image
    #[serde(default = "default_large_image")]
    pub default_large_image: String,
    /// Hover text used when an update sets no large text
    #[serde(default = "default_large_text")]
    pub default_large_text: String,
}

fn default_application_id() -> String {
    "1444795416846663914".to_string()
}

fn default_large_image() -> String {
    "logo".to_string()
}

fn default_large_text() -> String {
    "Presence Link".to_string()
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            application_id: default_application_id(),
            default_large_image: default_large_image(),
            default_large_text: default_large_text(),
        }
    }
}

impl PresenceConfig {
    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: PresenceConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(config)
        } else {
            Ok(PresenceConfig::default())
        }
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "presencelink", "PresenceLink")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
