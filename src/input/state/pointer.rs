use crate::input::events::PointerEvent;

use super::{DrawingState, DrawingSurface};

impl DrawingSurface {
    /// Dispatches a pointer event.
    ///
    /// Returns `false` for event kinds the surface does not handle, in which
    /// case nothing changes.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up => self.on_pointer_up(),
            PointerEvent::Cancel => return false,
        }
        true
    }

    /// Starts a new stroke at (x, y) with the current color and thickness.
    ///
    /// A stroke left in progress by a missing up event is discarded.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if matches!(self.state, DrawingState::Drawing { .. }) {
            log::debug!("Pointer down during a stroke; discarding unfinished stroke");
        }
        let mut stroke = self.settings.start_stroke();
        stroke.push(x, y);
        self.state = DrawingState::Drawing { stroke };
        self.needs_redraw = true;
    }

    /// Extends the in-progress stroke. Ignored when no stroke was started.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if let DrawingState::Drawing { stroke } = &mut self.state {
            stroke.push(x, y);
            self.needs_redraw = true;
        }
    }

    /// Commits the in-progress stroke, even a single-point one.
    ///
    /// Ignored when no stroke was started.
    pub fn on_pointer_up(&mut self) {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Drawing { stroke } => {
                log::debug!(
                    "Committed stroke with {} points ({} total)",
                    stroke.len(),
                    self.history.committed().len() + 1
                );
                self.history.commit(stroke);
                self.needs_redraw = true;
            }
            DrawingState::Idle => {
                log::debug!("Pointer up without a stroke in progress");
            }
        }
    }
}
