use std::{fmt, path::PathBuf, sync::Arc};

use crate::export::{
    compose::PixelBuffer,
    dependencies::ExportDependencies,
    file::ExportConfig,
    types::ExportError,
};
use tokio::task;

#[derive(Clone)]
pub(crate) struct ExportRequest {
    pub(crate) buffer: PixelBuffer,
    pub(crate) save_config: ExportConfig,
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("buffer", &self.buffer)
            .field("save_directory", &self.save_config.save_directory)
            .finish()
    }
}

/// Encodes and writes one drawing. Blocking work runs off the async workers.
pub(crate) async fn perform_export(
    request: ExportRequest,
    dependencies: Arc<ExportDependencies>,
) -> Result<PathBuf, ExportError> {
    log::info!(
        "Starting export ({}x{})",
        request.buffer.width(),
        request.buffer.height()
    );

    let ExportRequest {
        buffer,
        save_config,
    } = request;

    task::spawn_blocking(move || {
        let image_data = dependencies.encoder.encode(buffer)?;
        log::debug!("Encoded PNG: {} bytes", image_data.len());
        dependencies.saver.save(&image_data, &save_config)
    })
    .await
    .map_err(|e| ExportError::Task(format!("Export task failed: {}", e)))?
}
