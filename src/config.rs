/// Application configuration
///
/// Settings come from three layers, later ones winning:
/// 1. Built-in defaults
/// 2. `config.json` in the user's config directory:
///    - Linux: ~/.config/rad-electric/config.json
///    - macOS: ~/Library/Application Support/rad-electric/config.json
///    - Windows: %APPDATA%\rad-electric\config.json
/// 3. Environment variables `RAD_ELECTRIC_ENDPOINT` and `RAD_ELECTRIC_ASSETS`
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::state::lead::ResetDelays;

const ENDPOINT_VAR: &str = "RAD_ELECTRIC_ENDPOINT";
const ASSETS_VAR: &str = "RAD_ELECTRIC_ASSETS";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// URL that lead forms are POSTed to
    pub endpoint: String,
    /// Hard deadline for a single submission
    pub request_timeout_secs: u64,
    /// How long the success notice stays up
    pub success_reset_secs: u64,
    /// How long the error notice stays up
    pub error_reset_secs: u64,
    /// Directory that image paths in the content table are relative to
    pub assets_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8888/".to_string(),
            request_timeout_secs: 15,
            success_reset_secs: 8,
            error_reset_secs: 5,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl SiteConfig {
    /// Load the configuration from disk and the environment.
    ///
    /// A missing config file is not an error. An unreadable or malformed
    /// one is logged and replaced by the defaults; environment overrides
    /// apply either way.
    pub fn load() -> Self {
        Self::load_from(Self::config_path().as_deref(), |key| std::env::var(key).ok())
    }

    fn load_from<F>(path: Option<&Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path).unwrap_or_else(|e| {
                log::warn!("Ignoring config file {}: {e}", path.display());
                Self::default()
            }),
            _ => Self::default(),
        };
        config.apply_overrides(lookup);
        config
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config JSON; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply environment overrides through a lookup function
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        if let Some(assets) = lookup(ASSETS_VAR).filter(|v| !v.trim().is_empty()) {
            self.assets_dir = PathBuf::from(assets.trim());
        }
    }

    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("rad-electric");
        path.push("config.json");
        Some(path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn reset_delays(&self) -> ResetDelays {
        ResetDelays {
            success: Duration::from_secs(self.success_reset_secs),
            error: Duration::from_secs(self.error_reset_secs),
        }
    }

    /// Resolve an image path from the content table
    pub fn asset(&self, relative: &str) -> PathBuf {
        self.assets_dir.join(relative)
    }
}
