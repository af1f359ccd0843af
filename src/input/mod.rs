//! Pointer handling and the drawing surface state machine.
//!
//! This module translates host pointer events into strokes. It keeps the
//! current pen settings (color, thickness), the in-progress stroke and the
//! stroke history, and composites them for display.

pub mod events;
pub mod state;
pub mod view;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{BrushSettings, DrawingState, DrawingSurface, SurfaceError};
pub use view::DrawingView;
