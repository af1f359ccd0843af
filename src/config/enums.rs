//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a background photo is scaled into the canvas.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundFit {
    /// Fill the whole canvas, cropping the overflow (keeps aspect ratio)
    #[default]
    Cover,
    /// Show the whole image, letterboxed (keeps aspect ratio)
    Contain,
    /// Stretch to the canvas size
    Stretch,
}

/// Brush size buttons offered to the user.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BrushPreset {
    Small,
    Medium,
    Large,
}

impl BrushPreset {
    /// Parses a preset name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or hex string
/// default_color = "black"
/// default_color = "#FF8000"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color or `#RRGGBB` / `#AARRGGBB` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Parses the specification, reporting errors.
    pub fn try_to_color(&self) -> Result<Color, crate::draw::ColorParseError> {
        match self {
            ColorSpec::Name(spec) => Color::parse(spec),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the specification to a [`Color`].
    ///
    /// Unparseable strings fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        self.try_to_color().unwrap_or_else(|err| {
            warn!("{}, using black", err);
            BLACK
        })
    }
}

impl From<&str> for ColorSpec {
    fn from(spec: &str) -> Self {
        ColorSpec::Name(spec.to_string())
    }
}
