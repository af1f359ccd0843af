//! RGBA color type, color-spec parsing and the default crayon palette.

use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use kidsdraw::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(Color::parse("#FF0000").unwrap(), red);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a color specification cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color specification is empty")]
    Empty,

    #[error("unknown color name '{0}'")]
    UnknownName(String),

    #[error("malformed hex color '{0}' (expected #RRGGBB or #AARRGGBB)")]
    MalformedHex(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb8(0xff, r, g, b)
    }

    fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Parses a color specification.
    ///
    /// Accepted forms (surrounding whitespace is ignored, names are
    /// case-insensitive):
    /// - `#RRGGBB` (opaque)
    /// - `#AARRGGBB` (alpha first)
    /// - a named color: `black`, `darkgray`, `gray`, `lightgray`, `white`,
    ///   `red`, `green`, `blue`, `yellow`, `cyan`, `magenta`, `aqua`,
    ///   `fuchsia`, `darkgrey`, `grey`, `lightgrey`, `lime`, `maroon`, `navy`,
    ///   `olive`, `purple`, `silver`, `teal`, plus the palette extras
    ///   `orange`, `pink` and `skin`.
    pub fn parse(spec: &str) -> Result<Self, ColorParseError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = spec.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::MalformedHex(spec.to_string()));
        }

        name_to_color(spec).ok_or_else(|| ColorParseError::UnknownName(spec.to_string()))
    }

    /// Formats the color as `#RRGGBB`, or `#AARRGGBB` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        );
        if a == 0xff {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{a:02X}{r:02X}{g:02X}{b:02X}")
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    let [b3, b2, b1, b0] = value.to_be_bytes();
    match hex.len() {
        6 => Some(Color::from_rgb8(b2, b1, b0)),
        8 => Some(Color::from_argb8(b3, b2, b1, b0)),
        _ => None,
    }
}

/// Maps color name strings to Color values (case-insensitive).
pub fn name_to_color(name: &str) -> Option<Color> {
    let rgb = match name.to_lowercase().as_str() {
        "black" => 0x000000,
        "darkgray" | "darkgrey" => 0x444444,
        "gray" | "grey" => 0x888888,
        "lightgray" | "lightgrey" => 0xCCCCCC,
        "white" => 0xFFFFFF,
        "red" => 0xFF0000,
        "green" | "lime" => 0x00FF00,
        "blue" => 0x0000FF,
        "yellow" => 0xFFFF00,
        "cyan" | "aqua" => 0x00FFFF,
        "magenta" | "fuchsia" | "pink" => 0xFF00FF,
        "maroon" => 0x800000,
        "navy" => 0x000080,
        "olive" => 0x808000,
        "purple" => 0x800080,
        "silver" => 0xC0C0C0,
        "teal" => 0x008080,
        "orange" => 0xFF8000,
        "skin" => 0xFFE0BD,
        _ => return None,
    };
    let [_, r, g, b] = u32::to_be_bytes(rgb);
    Some(Color::from_rgb8(r, g, b))
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color, also the default canvas fill
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color, the default pen color
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Crayon palette shown to the user, in button order.
///
/// Entry 1 (black) is selected when the app starts.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#FFE0BD", "#000000", "#FF0000", "#FF8000", "#FFFF00", "#00C000", "#0000FF", "#FFFFFF",
];

/// Index into [`DEFAULT_PALETTE`] of the initially selected crayon.
pub const DEFAULT_PALETTE_INDEX: usize = 1;
