//! Configuration file support for Tempo.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/tempo/config.toml`.
//! Every knob has a safe default; a missing or malformed file never
//! blocks a session.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub safety: SafetyConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Physiological safety constraint set applied by the sanitizer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Hard cap on exercises per workout; the tail is truncated.
    #[serde(default = "default_max_exercises")]
    pub max_exercises: usize,

    /// Isometric holds longer than this are split into 60s sets.
    #[serde(default = "default_isometric_split_seconds")]
    pub isometric_split_seconds: u32,

    /// Minimum sets, except for cardio or "max"-tagged exercises.
    #[serde(default = "default_min_sets")]
    pub min_sets: u32,

    /// Rest injected when none is given.
    #[serde(default = "default_rest_seconds")]
    pub default_rest_seconds: u32,

    /// Rest injected for compound movements when none is given.
    #[serde(default = "default_compound_rest_seconds")]
    pub compound_rest_seconds: u32,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            max_exercises: default_max_exercises(),
            isometric_split_seconds: default_isometric_split_seconds(),
            min_sets: default_min_sets(),
            default_rest_seconds: default_rest_seconds(),
            compound_rest_seconds: default_compound_rest_seconds(),
        }
    }
}

/// Session engine timing parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Length of every Prep step.
    #[serde(default = "default_prep_seconds")]
    pub prep_seconds: u32,

    /// Ticks between the completion cue and the completion callback.
    #[serde(default = "default_completion_grace_seconds")]
    pub completion_grace_seconds: u32,

    /// Calorie estimate per minute of work.
    #[serde(default = "default_kcal_per_minute")]
    pub kcal_per_minute: f64,

    /// Start sessions with audio muted.
    #[serde(default)]
    pub start_muted: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prep_seconds: default_prep_seconds(),
            completion_grace_seconds: default_completion_grace_seconds(),
            kcal_per_minute: default_kcal_per_minute(),
            start_muted: false,
        }
    }
}

// Default value functions
fn default_max_exercises() -> usize {
    8
}

fn default_isometric_split_seconds() -> u32 {
    60
}

fn default_min_sets() -> u32 {
    3
}

fn default_rest_seconds() -> u32 {
    45
}

fn default_compound_rest_seconds() -> u32 {
    90
}

fn default_prep_seconds() -> u32 {
    5
}

fn default_completion_grace_seconds() -> u32 {
    2
}

fn default_kcal_per_minute() -> f64 {
    5.0
}

impl Config {
    /// Load configuration from the standard config path.
    ///
    /// A missing or malformed file falls back to defaults with a
    /// warning; the ambient config must never block a session.
    pub fn load() -> Result<Self> {
        Ok(Self::load_or_default(&Self::default_config_path()))
    }

    /// Load from a path, using defaults when the file is missing or
    /// does not parse. Explicit user-supplied paths should use the
    /// strict [`load_from`](Self::load_from) instead.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load config at {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
        base.join("tempo").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
