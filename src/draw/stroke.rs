//! Freehand stroke model.

use super::color::Color;

/// One continuous finger-drag gesture.
///
/// A stroke owns its style: color and thickness are fixed when the stroke is
/// started and never follow later changes to the drawing settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color
    pub color: Color,
    /// Line thickness in pixels
    pub thickness: f64,
    /// Sequence of (x, y) coordinates traced by the pointer, in drawing order
    points: Vec<(f64, f64)>,
}

impl Stroke {
    /// Creates an empty stroke with the given style.
    pub fn new(color: Color, thickness: f64) -> Self {
        Self {
            color,
            thickness,
            points: Vec::new(),
        }
    }

    /// Appends a point to the end of the stroke.
    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push((x, y));
    }

    /// Points in the order they were recorded.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Empty strokes are never rendered.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}
