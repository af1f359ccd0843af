//! Toolkit-facing capability interface.

use super::events::PointerEvent;
use super::state::{DrawingSurface, SurfaceError};

/// What a host toolkit needs from a drawable view.
///
/// A thin adapter in the host forwards its native touch, paint and layout
/// callbacks to these methods.
pub trait DrawingView {
    /// Handles one pointer event; returns `false` when the event is ignored.
    fn handle_pointer_event(&mut self, event: PointerEvent) -> bool;

    /// Paints the current frame onto `ctx`.
    fn render(&self, ctx: &cairo::Context);

    /// Called whenever the view gets a new size.
    fn on_resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError>;
}

impl DrawingView for DrawingSurface {
    fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        DrawingSurface::handle_pointer_event(self, event)
    }

    fn render(&self, ctx: &cairo::Context) {
        DrawingSurface::render(self, ctx);
    }

    fn on_resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        DrawingSurface::on_resize(self, width, height)
    }
}
