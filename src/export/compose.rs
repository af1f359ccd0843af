//! Flattening the visible canvas into a single pixel buffer.

use super::types::ExportError;
use crate::config::BackgroundFit;
use crate::draw::{BackgroundImage, Color, fill_color};
use crate::input::DrawingView;

/// Layers painted underneath the drawing.
#[derive(Debug, Clone, Copy)]
pub struct Backdrop<'a> {
    /// Solid fill covering the whole canvas
    pub fill: Color,
    /// Optional photo drawn over the fill
    pub image: Option<&'a BackgroundImage>,
    /// Scaling of the photo
    pub fit: BackgroundFit,
}

/// Owned ARGB32 pixels that can be moved to a worker thread.
///
/// Cairo surfaces are not `Send`, so rendering happens on the host thread and
/// only the raw pixels cross over to the export worker.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    stride: i32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Copies the pixels out of an image surface.
    pub fn from_surface(surface: &mut cairo::ImageSurface) -> Result<Self, ExportError> {
        surface.flush();
        let width = surface.width();
        let height = surface.height();
        let stride = surface.stride();
        let data = surface
            .data()
            .map_err(|err| ExportError::Encode(format!("cannot read pixels: {err}")))?
            .to_vec();
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Wraps the pixels in an image surface again.
    pub fn into_surface(self) -> Result<cairo::ImageSurface, ExportError> {
        Ok(cairo::ImageSurface::create_for_data(
            self.data,
            cairo::Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )?)
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Renders backdrop and drawing into one opaque-by-default image.
///
/// Paint order: fill, background photo, then the view's own composite.
pub fn flatten(
    view: &dyn DrawingView,
    width: i32,
    height: i32,
    backdrop: Backdrop<'_>,
) -> Result<PixelBuffer, ExportError> {
    let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        fill_color(&ctx, backdrop.fill);
        if let Some(image) = backdrop.image {
            image.render(&ctx, backdrop.fit, width as f64, height as f64);
        }
        view.render(&ctx);
    }
    let buffer = PixelBuffer::from_surface(&mut surface)?;
    log::debug!("Flattened canvas into {:?}", buffer);
    Ok(buffer)
}

/// Encodes a pixel buffer as PNG bytes.
pub fn encode_png(buffer: PixelBuffer) -> Result<Vec<u8>, ExportError> {
    let surface = buffer.into_surface()?;
    let mut bytes = Vec::new();
    surface
        .write_to_png(&mut bytes)
        .map_err(|err| ExportError::Encode(err.to_string()))?;
    Ok(bytes)
}
