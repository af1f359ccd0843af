//! Background photo placed under the drawing.

use super::render::render_image_fitted;
use crate::config::BackgroundFit;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a background image.
#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("Failed to open background image {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Background image {path} is corrupted or not a PNG: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("Background image {0} has no pixels")]
    Empty(PathBuf),
}

/// Decoded background image plus the path it came from.
pub struct BackgroundImage {
    path: PathBuf,
    image: cairo::ImageSurface,
}

impl BackgroundImage {
    /// Loads a PNG file from disk.
    pub fn load(path: &Path) -> Result<Self, BackgroundError> {
        let file = File::open(path).map_err(|source| BackgroundError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let image = cairo::ImageSurface::create_from_png(&mut reader).map_err(|err| {
            BackgroundError::Decode {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;

        if image.width() <= 0 || image.height() <= 0 {
            return Err(BackgroundError::Empty(path.to_path_buf()));
        }

        log::info!(
            "Loaded background {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Paints the image scaled into a `width` x `height` view.
    pub fn render(&self, ctx: &cairo::Context, fit: BackgroundFit, width: f64, height: f64) {
        render_image_fitted(ctx, &self.image, fit, width, height);
    }
}

impl std::fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundImage")
            .field("path", &self.path)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_png(path: &Path, width: i32, height: i32) {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            ctx.set_source_rgb(0.0, 0.0, 1.0);
            ctx.paint().unwrap();
        }
        let mut file = File::create(path).unwrap();
        surface.write_to_png(&mut file).unwrap();
    }

    #[test]
    fn loads_png_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("photo.png");
        write_png(&path, 30, 20);

        let background = BackgroundImage::load(&path).unwrap();
        assert_eq!((background.width(), background.height()), (30, 20));
        assert_eq!(background.path(), path.as_path());
    }

    #[test]
    fn missing_file_reports_open_error() {
        let temp = TempDir::new().unwrap();
        let err = BackgroundImage::load(&temp.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, BackgroundError::Open { .. }));
    }

    #[test]
    fn garbage_file_reports_decode_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = BackgroundImage::load(&path).unwrap_err();
        assert!(matches!(err, BackgroundError::Decode { .. }));
    }
}
