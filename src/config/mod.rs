//! Configuration file support for polyscribe.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/polyscribe/config.toml`. Settings
//! cover stroke defaults, the vertex cap, undo depth and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{DrawingConfig, HistoryConfig};

use crate::draw::{BLACK, RED};
use crate::input::StrokeStyle;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// preview_color = "red"
/// default_thickness = 2.0
/// max_points = 10
///
/// [history]
/// max_depth = 0
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke defaults and the vertex cap
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo history limits
    #[serde(default)]
    pub history: HistoryConfig,

    /// Keyboard shortcuts for every action
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `max_points`: 3 - 100
    fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(1.0, 20.0);
        }

        if !(3..=100).contains(&self.drawing.max_points) {
            log::warn!(
                "Invalid max_points {}, clamping to 3-100 range",
                self.drawing.max_points
            );
            self.drawing.max_points = self.drawing.max_points.clamp(3, 100);
        }
    }

    /// Stroke settings for the drawing machine.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            preview_color: self.drawing.preview_color.to_color_or(RED),
            color: self.drawing.default_color.to_color_or(BLACK),
            thickness: self.drawing.default_thickness,
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("polyscribe");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Writes the documented example config to the default location.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
