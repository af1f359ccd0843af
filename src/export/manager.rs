use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::{Mutex, Notify, mpsc};

use crate::export::{
    compose::PixelBuffer,
    dependencies::ExportDependencies,
    file::ExportConfig,
    pipeline::{ExportRequest, perform_export},
    types::{ExportError, ExportOutcome},
};

/// Shared state for running exports off the host thread.
///
/// Requests are queued to a background task on the tokio runtime; the host
/// awaits [`ExportManager::wait_for_outcome`]. Only one export may be in flight.
#[derive(Clone)]
pub struct ExportManager {
    /// Channel for sending export requests.
    request_tx: mpsc::UnboundedSender<ExportRequest>,
    /// Set while an export is queued or running.
    busy: Arc<AtomicBool>,
    /// Result of the last export, until taken.
    last_result: Arc<Mutex<Option<ExportOutcome>>>,
    /// Signalled after every finished export.
    finished: Arc<Notify>,
}

impl ExportManager {
    /// Create a new export manager and spawn its worker on `runtime_handle`.
    pub fn new(runtime_handle: &tokio::runtime::Handle) -> Self {
        Self::with_dependencies(runtime_handle, ExportDependencies::default())
    }

    /// Create an export manager with custom dependencies (useful for testing).
    pub fn with_dependencies(
        runtime_handle: &tokio::runtime::Handle,
        dependencies: ExportDependencies,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ExportRequest>();
        let busy = Arc::new(AtomicBool::new(false));
        let last_result = Arc::new(Mutex::new(None));
        let finished = Arc::new(Notify::new());
        let dependencies = Arc::new(dependencies);

        let busy_clone = busy.clone();
        let result_clone = last_result.clone();
        let finished_clone = finished.clone();

        runtime_handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                log::debug!("Processing export request: {:?}", request);

                let outcome = match perform_export(request, dependencies.clone()).await {
                    Ok(path) => {
                        log::info!("Export successful: {}", path.display());
                        ExportOutcome::Success(path)
                    }
                    Err(e) => {
                        let error_message = e.to_string();
                        log::error!("Export failed: {}", error_message);
                        ExportOutcome::Failed(error_message)
                    }
                };

                *result_clone.lock().await = Some(outcome);
                busy_clone.store(false, Ordering::Release);
                finished_clone.notify_one();
            }
        });

        Self {
            request_tx,
            busy,
            last_result,
            finished,
        }
    }

    /// Queue an export. Non-blocking.
    ///
    /// # Errors
    /// - [`ExportError::Busy`] while a previous export has not finished
    /// - [`ExportError::NotRunning`] when the worker is gone
    pub fn request_export(
        &self,
        buffer: PixelBuffer,
        save_config: ExportConfig,
    ) -> Result<(), ExportError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("Export requested while another export is running; ignoring");
            return Err(ExportError::Busy);
        }

        let request = ExportRequest {
            buffer,
            save_config,
        };

        if self.request_tx.send(request).is_err() {
            self.busy.store(false, Ordering::Release);
            return Err(ExportError::NotRunning);
        }

        Ok(())
    }

    /// Get the result of the last export and clear it.
    pub async fn take_result(&self) -> Option<ExportOutcome> {
        self.last_result.lock().await.take()
    }

    /// Waits until an export outcome is available and takes it.
    ///
    /// Only call this after a successful [`ExportManager::request_export`];
    /// otherwise it waits forever.
    pub async fn wait_for_outcome(&self) -> ExportOutcome {
        loop {
            if let Some(outcome) = self.take_result().await {
                return outcome;
            }
            self.finished.notified().await;
        }
    }
}

#[cfg(test)]
impl ExportManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<ExportRequest>();
        drop(rx);
        Self {
            request_tx: tx,
            busy: Arc::new(AtomicBool::new(false)),
            last_result: Arc::new(Mutex::new(None)),
            finished: Arc::new(Notify::new()),
        }
    }
}
