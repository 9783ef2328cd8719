// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay's configuration, including loading and
//! saving user preferences to a `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_position = Some(iced_toasts::Position::TopRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::design_tokens::timing;
use crate::error::Result;
use crate::toast::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Auto-dismiss duration in milliseconds; `0` makes toasts sticky.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub default_position: Option<Position>,
    #[serde(default)]
    pub show_progress: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(timing::DEFAULT_DURATION.as_millis() as u64),
            default_position: Some(Position::BottomCenter),
            show_progress: Some(true),
        }
    }
}

impl Config {
    /// Returns the configured default duration, falling back to the
    /// canonical one.
    pub fn default_duration(&self) -> Duration {
        self.default_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(timing::DEFAULT_DURATION)
    }

    /// Returns the configured default position, falling back to bottom-center.
    pub fn default_position(&self) -> Position {
        self.default_position.unwrap_or_default()
    }

    pub fn show_progress(&self) -> bool {
        self.show_progress.unwrap_or(true)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
