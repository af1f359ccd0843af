//! Configuration file support for kidsdraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/kidsdraw/config.toml`. Settings include the starting pen, the
//! crayon palette, brush presets, canvas size and export/share behaviour.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{BackgroundFit, BrushPreset, ColorSpec};
pub use types::{CanvasConfig, DrawingConfig, ExportSettings};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_brush_size = 20.0
/// display_density = 2.0
/// palette = ["#000000", "#FF0000", "#0000FF"]
/// default_palette_index = 0
///
/// [canvas]
/// width = 1080
/// height = 1920
/// background_fit = "cover"
///
/// [export]
/// filename_prefix = "KidDrawingApp_"
/// share_command = ["xdg-open"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen, palette and brush presets
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Export location and sharing
    #[serde(default)]
    pub export: ExportSettings,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced with the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size` and brush presets: 1.0 - 100.0
    /// - `display_density`: 0.5 - 4.0
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    /// - `default_palette_index`: within the palette
    fn validate_and_clamp(&mut self) {
        let drawing = &mut self.drawing;

        for (name, value) in [
            ("default_brush_size", &mut drawing.default_brush_size),
            ("brush_small", &mut drawing.brush_small),
            ("brush_medium", &mut drawing.brush_medium),
            ("brush_large", &mut drawing.brush_large),
        ] {
            if !(1.0..=100.0).contains(&*value) {
                log::warn!("Invalid {} {:.1}, clamping to 1.0-100.0 range", name, *value);
                *value = if value.is_nan() {
                    1.0
                } else {
                    (*value).clamp(1.0, 100.0)
                };
            }
        }

        if !(0.5..=4.0).contains(&drawing.display_density) {
            log::warn!(
                "Invalid display_density {:.2}, clamping to 0.5-4.0 range",
                drawing.display_density
            );
            drawing.display_density = if drawing.display_density.is_nan() {
                1.0
            } else {
                drawing.display_density.clamp(0.5, 4.0)
            };
        }

        if drawing.palette.is_empty() {
            log::warn!("Empty palette, restoring the default palette");
            drawing.palette = DrawingConfig::default().palette;
        }

        if drawing.default_palette_index >= drawing.palette.len() {
            log::warn!(
                "Invalid default_palette_index {}, falling back to 0",
                drawing.default_palette_index
            );
            drawing.default_palette_index = 0;
        }

        for spec in &drawing.palette {
            if let Err(err) = spec.try_to_color() {
                log::warn!("Palette entry {:?} is unusable: {}", spec, err);
            }
        }

        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(16..=8192).contains(&*value) {
                log::warn!("Invalid canvas {} {}, clamping to 16-8192 range", name, value);
                *value = (*value).clamp(16, 8192);
            }
        }

        if self.export.filename_prefix.contains(['/', '\\']) {
            log::warn!(
                "Invalid filename_prefix '{}', falling back to default",
                self.export.filename_prefix
            );
            self.export.filename_prefix = ExportSettings::default().filename_prefix;
        }

        if matches!(&self.export.share_command, Some(argv) if argv.is_empty()) {
            log::warn!("Empty share_command, sharing disabled");
            self.export.share_command = None;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/kidsdraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("kidsdraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the config to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the bundled `config.example.toml` to the user's config directory
    /// and returns its path.
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
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
