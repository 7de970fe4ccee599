//! Configuration handling for the scanning station

use crate::i18n::Translator;
use crate::search::DEFAULT_ADDRESS;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the search service address
pub const ADDRESS_ENV: &str = "MANIFEST_SEARCH_ADDRESS";

const DEFAULT_TOAST_SECONDS: u64 = 4;

/// User configuration for the station
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScannerConfig {
    /// Package search service address
    pub search_address: Option<String>,
    /// Shipping provider the form opens with
    pub shipping_provider_code: Option<String>,
    /// Sales channel the form opens with
    pub channel_id: Option<String>,
    /// How long notifications stay on screen
    pub toast_seconds: Option<u64>,
    /// Localized notification texts, keyed by the English message
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

impl ScannerConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "manifest-scanner", "manifest-scanner")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, using defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: ScannerConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Search service address: environment, then config file, then default
    pub fn search_address(&self) -> String {
        Self::resolve_address(std::env::var(ADDRESS_ENV).ok(), self.search_address.as_deref())
    }

    fn resolve_address(env: Option<String>, configured: Option<&str>) -> String {
        env.filter(|a| !a.trim().is_empty())
            .or_else(|| configured.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds.unwrap_or(DEFAULT_TOAST_SECONDS))
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.translations.clone())
    }
}
