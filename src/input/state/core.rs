//! Drawing state machine and drawing surface state.

use crate::draw::{CanvasSurface, Color, ColorParseError, Stroke, StrokeHistory};
use thiserror::Error;

/// Errors returned by drawing surface operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The caller passed a value the surface cannot use (bad color, size, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Rendering to an image was requested before the first resize.
    #[error("Drawing surface has no size yet")]
    NotSized,

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}

impl From<ColorParseError> for SurfaceError {
    fn from(err: ColorParseError) -> Self {
        SurfaceError::InvalidArgument(err.to_string())
    }
}

/// Style applied to the next stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSettings {
    /// Current pen color
    pub color: Color,
    /// Current brush thickness in pixels
    pub thickness: f64,
}

impl BrushSettings {
    /// Starts an empty stroke carrying these settings.
    pub fn start_stroke(&self) -> Stroke {
        Stroke::new(self.color, self.thickness)
    }
}

/// Current gesture state.
#[derive(Debug)]
pub enum DrawingState {
    /// No finger on the surface
    Idle,
    /// A finger is down; the stroke collects every point of the drag
    Drawing {
        /// The in-progress stroke
        stroke: Stroke,
    },
}

/// The finger-painting surface.
///
/// Owns the in-progress stroke, the committed strokes, the undo stack and the
/// base layer. All mutation happens through the pointer handlers and the
/// setters below, on the thread that owns the surface.
pub struct DrawingSurface {
    /// Style for new strokes
    pub(crate) settings: BrushSettings,
    /// Gesture state machine
    pub(crate) state: DrawingState,
    /// Committed strokes and the undo stack
    pub(crate) history: StrokeHistory,
    /// Cached base layer, created on the first resize
    pub(crate) base: Option<CanvasSurface>,
    /// Whether the host should repaint the view
    pub needs_redraw: bool,
}

impl DrawingSurface {
    /// Creates an unsized surface with the given initial pen.
    ///
    /// The host must call [`DrawingSurface::on_resize`] once the view size is
    /// known before a snapshot can be taken.
    pub fn new(settings: BrushSettings) -> Self {
        Self {
            settings,
            state: DrawingState::Idle,
            history: StrokeHistory::new(),
            base: None,
            needs_redraw: true,
        }
    }

    /// Current pen settings.
    pub fn settings(&self) -> BrushSettings {
        self.settings
    }

    /// Committed strokes in paint order.
    pub fn committed(&self) -> &[Stroke] {
        self.history.committed()
    }

    /// Strokes removed by undo, most recently removed last.
    pub fn undone(&self) -> &[Stroke] {
        self.history.undone()
    }

    /// The stroke being drawn right now, if a finger is down.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            DrawingState::Drawing { stroke } => Some(stroke),
            DrawingState::Idle => None,
        }
    }

    /// Surface size in pixels, or `None` before the first resize.
    pub fn size(&self) -> Option<(i32, i32)> {
        self.base.as_ref().map(|base| (base.width(), base.height()))
    }

    /// Parses `spec` and uses it for the in-progress stroke and all later strokes.
    ///
    /// Committed strokes keep their own color. On error nothing changes.
    pub fn set_color(&mut self, spec: &str) -> Result<(), SurfaceError> {
        let color = Color::parse(spec).inspect_err(|err| {
            log::warn!("Rejected color '{}': {}", spec, err);
        })?;
        self.set_color_value(color);
        Ok(())
    }

    /// Same as [`DrawingSurface::set_color`] for an already parsed color.
    pub fn set_color_value(&mut self, color: Color) {
        self.settings.color = color;
        if let DrawingState::Drawing { stroke } = &mut self.state {
            stroke.color = color;
            self.needs_redraw = true;
        }
        log::debug!("Pen color set to {}", color.to_hex());
    }

    /// Sets the brush size in device-independent units.
    ///
    /// `px_per_unit` is the display density supplied by the host; the stored
    /// thickness is `size * px_per_unit` pixels. Applies to the in-progress
    /// stroke and later strokes only.
    pub fn set_brush_size(&mut self, size: f64, px_per_unit: f64) -> Result<(), SurfaceError> {
        if !(size.is_finite() && size > 0.0) {
            log::warn!("Rejected brush size {}", size);
            return Err(SurfaceError::InvalidArgument(format!(
                "brush size must be a positive number, got {size}"
            )));
        }
        if !(px_per_unit.is_finite() && px_per_unit > 0.0) {
            log::warn!("Rejected display density {}", px_per_unit);
            return Err(SurfaceError::InvalidArgument(format!(
                "display density must be a positive number, got {px_per_unit}"
            )));
        }

        let thickness = size * px_per_unit;
        self.settings.thickness = thickness;
        if let DrawingState::Drawing { stroke } = &mut self.state {
            stroke.thickness = thickness;
            self.needs_redraw = true;
        }
        log::debug!("Brush size set to {:.1}px ({} x {})", thickness, size, px_per_unit);
        Ok(())
    }

    /// Removes the most recent committed stroke onto the undo stack.
    ///
    /// Does nothing when there is nothing to undo.
    pub fn undo(&mut self) {
        if self.history.undo() {
            self.needs_redraw = true;
            log::debug!("Undo; {} strokes remain", self.history.committed().len());
        } else {
            log::debug!("Undo requested with empty history");
        }
    }

    /// Recreates the base layer for a new view size.
    ///
    /// The previous base layer content is dropped. Committed strokes are
    /// unaffected and keep rendering through the replay in `render`.
    pub fn on_resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        if width < 0 || height < 0 {
            return Err(SurfaceError::InvalidArgument(format!(
                "surface size must not be negative, got {width}x{height}"
            )));
        }
        self.base = Some(CanvasSurface::new(width, height)?);
        self.needs_redraw = true;
        log::debug!("Drawing surface resized to {}x{}", width, height);
        Ok(())
    }

    /// Returns whether a repaint was requested and clears the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
