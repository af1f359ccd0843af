//! Rendering primitives and stroke definitions (Cairo-based).
//!
//! This module defines the core drawing types of the canvas:
//! - [`Color`]: RGBA color representation and color-spec parsing
//! - [`Stroke`]: one freehand gesture with its own color and thickness
//! - [`StrokeHistory`]: committed strokes plus the undo stack
//! - [`CanvasSurface`]: the cached raster base layer
//! - [`BackgroundImage`]: optional photo drawn under the strokes
//! - Rendering functions for Cairo-based output

pub mod background;
pub mod canvas_surface;
pub mod color;
pub mod history;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use background::{BackgroundError, BackgroundImage};
pub use canvas_surface::CanvasSurface;
pub use color::{Color, ColorParseError};
pub use history::StrokeHistory;
pub use render::{fill_color, render_image_fitted, render_stroke, render_strokes};
pub use stroke::Stroke;

pub use color::{BLACK, BLUE, GREEN, RED, WHITE};
