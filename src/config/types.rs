//! Configuration type definitions.

use super::enums::{BackgroundFit, BrushPreset, ColorSpec};
use crate::draw::color::{DEFAULT_PALETTE, DEFAULT_PALETTE_INDEX};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pen and palette settings.
///
/// Controls the pen the app starts with and the choices offered to the user.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen color; when absent the default palette entry is used
    #[serde(default)]
    pub default_color: Option<ColorSpec>,

    /// Initial brush size in device-independent units (valid range: 1.0 - 100.0)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: f64,

    /// Pixels per device-independent unit (valid range: 0.5 - 4.0)
    #[serde(default = "default_display_density")]
    pub display_density: f64,

    /// Crayon palette, in button order
    #[serde(default = "default_palette")]
    pub palette: Vec<ColorSpec>,

    /// Palette entry selected at startup
    #[serde(default = "default_palette_index")]
    pub default_palette_index: usize,

    /// Size of the "small" brush button
    #[serde(default = "default_brush_small")]
    pub brush_small: f64,

    /// Size of the "medium" brush button
    #[serde(default = "default_brush_medium")]
    pub brush_medium: f64,

    /// Size of the "large" brush button
    #[serde(default = "default_brush_large")]
    pub brush_large: f64,
}

impl DrawingConfig {
    /// Brush size in device-independent units for a preset button.
    pub fn preset_size(&self, preset: BrushPreset) -> f64 {
        match preset {
            BrushPreset::Small => self.brush_small,
            BrushPreset::Medium => self.brush_medium,
            BrushPreset::Large => self.brush_large,
        }
    }

    /// The pen color used at startup.
    pub fn initial_color(&self) -> ColorSpec {
        self.default_color
            .clone()
            .or_else(|| self.palette.get(self.default_palette_index).cloned())
            .unwrap_or_else(|| ColorSpec::from(DEFAULT_PALETTE[DEFAULT_PALETTE_INDEX]))
    }
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: None,
            default_brush_size: default_brush_size(),
            display_density: default_display_density(),
            palette: default_palette(),
            default_palette_index: default_palette_index(),
            brush_small: default_brush_small(),
            brush_medium: default_brush_medium(),
            brush_large: default_brush_large(),
        }
    }
}

/// Canvas settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Fill color under the background photo and strokes
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// How a background photo is scaled into the canvas
    #[serde(default)]
    pub background_fit: BackgroundFit,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background_color: default_background_color(),
            background_fit: BackgroundFit::default(),
        }
    }
}

/// Export and sharing settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportSettings {
    /// Directory for exported PNGs; defaults to the user cache directory
    #[serde(default)]
    pub directory: Option<String>,

    /// File name prefix; the Unix timestamp and `.png` are appended
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Command used to share an exported file; the file path is appended
    /// as the last argument (e.g. `["xdg-open"]`)
    #[serde(default)]
    pub share_command: Option<Vec<String>>,

    /// Show desktop notifications for export results
    #[serde(default)]
    pub notify: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: None,
            filename_prefix: default_filename_prefix(),
            share_command: None,
            notify: false,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_brush_size() -> f64 {
    20.0
}

fn default_display_density() -> f64 {
    1.0
}

fn default_palette() -> Vec<ColorSpec> {
    DEFAULT_PALETTE.iter().map(|spec| ColorSpec::from(*spec)).collect()
}

fn default_palette_index() -> usize {
    DEFAULT_PALETTE_INDEX
}

fn default_brush_small() -> f64 {
    10.0
}

fn default_brush_medium() -> f64 {
    20.0
}

fn default_brush_large() -> f64 {
    30.0
}

fn default_canvas_width() -> i32 {
    1080
}

fn default_canvas_height() -> i32 {
    1920
}

fn default_background_color() -> ColorSpec {
    ColorSpec::from("white")
}

fn default_filename_prefix() -> String {
    "KidDrawingApp_".to_string()
}
