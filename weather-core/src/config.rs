use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::warn;

use crate::{
    provider::openweather::DEFAULT_BASE_URL,
    state::{ResponseOrdering, WidgetState},
    units::DisplayUnit,
};

/// Environment variable that overrides the API key stored on disk.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Widget configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_unit = "imperial"
/// discard_stale_responses = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub default_unit: DisplayUnit,

    /// Ignore responses from searches that have since been superseded.
    /// Off by default: the last response to arrive wins.
    pub discard_stale_responses: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_unit: DisplayUnit::default(),
            discard_stale_responses: false,
        }
    }
}

impl Config {
    /// Load config from disk (or defaults if it doesn't exist yet) and apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env_overrides(|name| std::env::var(name).ok());

        if cfg.api_key.is_none() {
            warn!(
                "No API key configured; set {API_KEY_ENV} or run `weather configure`. \
                 Every lookup will fail until one is provided."
            );
        }

        Ok(cfg)
    }

    /// Load only the on-disk file, without environment overrides.
    pub fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-widget")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay values from the environment. `lookup` is `std::env::var` in
    /// production and a map in tests.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// The API key to send, or `""` when none is configured. The provider
    /// rejects the empty key and the lookup fails like any other.
    pub fn resolved_api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    pub fn ordering(&self) -> ResponseOrdering {
        if self.discard_stale_responses {
            ResponseOrdering::LatestIssuedOnly
        } else {
            ResponseOrdering::LastResolvedWins
        }
    }

    /// Fresh widget state honouring the configured unit and ordering.
    pub fn initial_state(&self) -> WidgetState {
        WidgetState::new(self.default_unit, self.ordering())
    }
}
