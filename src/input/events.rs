//! Generic pointer event types for toolkit-independent input.

/// Pointer event delivered by a host adapter.
///
/// Coordinates are in surface-local pixels. Host toolkits map their native
/// touch or mouse events to these values; anything without a counterpart
/// (hover, cancel, secondary buttons) becomes [`PointerEvent::Cancel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger touched the surface (starts a stroke)
    Down { x: f64, y: f64 },
    /// Finger moved while touching
    Move { x: f64, y: f64 },
    /// Finger lifted (commits the stroke)
    Up,
    /// Any other event kind; never handled
    Cancel,
}
