//! File saving for exported drawings.

use super::types::ExportError;
use crate::config::ExportSettings;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory to save drawings to (application-private cache by default).
    pub save_directory: PathBuf,
    /// File name prefix; the Unix timestamp and extension are appended.
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_export_directory(),
            filename_prefix: ExportSettings::default().filename_prefix,
        }
    }
}

impl ExportConfig {
    /// Builds the save configuration from the `[export]` config section.
    pub fn from_settings(settings: &ExportSettings) -> Self {
        Self {
            save_directory: settings
                .directory
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(default_export_directory),
            filename_prefix: settings.filename_prefix.clone(),
        }
    }
}

/// `~/.cache/kidsdraw`, or a temp directory when no cache directory is known.
pub fn default_export_directory() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("kidsdraw")
}

/// Generate a filename: prefix, Unix epoch seconds, `.png`.
pub fn generate_filename(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}{}.png", prefix, now.timestamp())
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save PNG bytes into the export directory.
///
/// # Returns
/// Absolute path to the saved file
pub fn save_png(image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;

    let filename = generate_filename(&config.filename_prefix, Utc::now());
    let file_path = directory.join(&filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    log::info!("Drawing saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
