//! Exporting drawings for kidsdraw.
//!
//! This module provides:
//! - Flattening the backdrop and drawing into one image
//! - PNG encoding off the host thread
//! - Timestamped file saving in a private cache directory
//! - Handing the saved file to a share command

pub mod compose;
pub mod file;
pub mod share;
pub mod types;

mod dependencies;
mod manager;
mod pipeline;

pub use compose::{Backdrop, PixelBuffer, flatten};
pub use dependencies::{ExportDependencies, ExportEncoder, ExportFileSaver};
pub use file::ExportConfig;
pub use manager::ExportManager;
pub use share::{CommandShare, ShareRequest, ShareTarget};
pub use types::{ExportError, ExportOutcome};
