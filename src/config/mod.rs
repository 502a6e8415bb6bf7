// src/config/mod.rs
//! User configuration: backend address, display theme, model gauges.
//!
//! Persisted as TOML under the user config directory so the theme choice
//! survives restarts. Anything unreadable falls back to defaults; a broken
//! config file must never keep the client from starting.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where the client points when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:7654";

/// Display theme, toggled at runtime and written back on change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the analysis service.
    pub backend_url: String,
    pub theme: Theme,
    /// Model names whose context-window gauges are rendered, in display
    /// order. Gauges appear only for names present in a report.
    pub models: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            theme: Theme::default(),
            models: [
                "GPT-4 (8K)",
                "GPT-4 Turbo (128K)",
                "Claude 3 Opus (200K)",
                "Gemini Pro (32K)",
                "Llama 2 (4K)",
                "Mistral Large (32K)",
            ]
            .map(str::to_string)
            .to_vec(),
        }
    }
}

impl Config {
    /// Load the config file, or defaults when it is missing or malformed.
    pub fn load() -> Config {
        let Some(path) = config_path() else {
            return Config::default();
        };
        match fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).unwrap_or_else(|err| {
                log::warn!("ignoring malformed config {}: {err}", path.display());
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    /// Write the config file, creating its directory on first save.
    pub fn save(&self) -> Result<()> {
        let path = config_path().context("no config directory available")?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let text = toml::to_string_pretty(self).context("serializing config")?;
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))
    }
}

/// `$XDG_CONFIG_HOME/toksight/config.toml`, falling back to
/// `~/.config/toksight/config.toml`.
fn config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("toksight").join("config.toml"))
}
