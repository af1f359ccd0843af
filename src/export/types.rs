//! Data types for drawing export.

use std::path::PathBuf;
use thiserror::Error;

/// Outcome of an export request, handed back to the host thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The PNG was written to this absolute path.
    Success(PathBuf),
    /// Nothing was written; the message is suitable for a user notice.
    Failed(String),
}

/// Errors that can occur while exporting a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("An export is already in progress")]
    Busy,

    #[error("Export worker is not running")]
    NotRunning,

    #[error("Failed to render drawing: {0}")]
    Render(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(String),

    #[error("Failed to save drawing: {0}")]
    Save(#[from] std::io::Error),

    #[error("Export task failed: {0}")]
    Task(String),

    #[error("Failed to share drawing: {0}")]
    Share(String),
}
