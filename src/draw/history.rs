//! Committed strokes and the undo stack.

use super::stroke::Stroke;

/// Ordered drawing history.
///
/// `committed` is in paint order (first = bottom layer, last = top layer).
/// `undone` receives strokes popped off the end of `committed`, most recently
/// removed last. Nothing reads `undone` back: there is no redo.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    committed: Vec<Stroke>,
    undone: Vec<Stroke>,
}

impl StrokeHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished stroke on top of the existing ones.
    pub fn commit(&mut self, stroke: Stroke) {
        self.committed.push(stroke);
    }

    /// Moves the most recently committed stroke onto the undo stack.
    ///
    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.undone.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Committed strokes in paint order.
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    /// Undone strokes, most recently removed last.
    pub fn undone(&self) -> &[Stroke] {
        &self.undone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, GREEN, RED};

    fn dot(color: crate::draw::Color) -> Stroke {
        let mut stroke = Stroke::new(color, 4.0);
        stroke.push(1.0, 1.0);
        stroke
    }

    #[test]
    fn undo_moves_tail_to_undo_stack_in_removal_order() {
        let mut history = StrokeHistory::new();
        history.commit(dot(RED));
        history.commit(dot(GREEN));
        history.commit(dot(BLUE));

        assert!(history.undo());
        assert!(history.undo());

        assert_eq!(history.committed(), &[dot(RED)]);
        assert_eq!(history.undone(), &[dot(BLUE), dot(GREEN)]);
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut history = StrokeHistory::new();
        assert!(!history.undo());
        assert!(history.committed().is_empty());
        assert!(history.undone().is_empty());
    }
}
