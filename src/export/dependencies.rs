use std::{path::PathBuf, sync::Arc};

use crate::export::{
    compose::{self, PixelBuffer},
    file::{self, ExportConfig},
    types::ExportError,
};

/// Abstraction over PNG encoding of flattened drawings.
pub trait ExportEncoder: Send + Sync {
    fn encode(&self, buffer: PixelBuffer) -> Result<Vec<u8>, ExportError>;
}

/// Abstraction over file saving for exported drawings.
pub trait ExportFileSaver: Send + Sync {
    fn save(&self, image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError>;
}

/// Bundle of dependencies used by the export pipeline. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub encoder: Arc<dyn ExportEncoder>,
    pub saver: Arc<dyn ExportFileSaver>,
}

impl Default for ExportDependencies {
    fn default() -> Self {
        Self {
            encoder: Arc::new(PngEncoder),
            saver: Arc::new(DefaultFileSaver),
        }
    }
}

struct PngEncoder;
struct DefaultFileSaver;

impl ExportEncoder for PngEncoder {
    fn encode(&self, buffer: PixelBuffer) -> Result<Vec<u8>, ExportError> {
        compose::encode_png(buffer)
    }
}

impl ExportFileSaver for DefaultFileSaver {
    fn save(&self, image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError> {
        file::save_png(image_data, config)
    }
}
