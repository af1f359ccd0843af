//! Off-screen base layer for the drawing surface.

use super::render::render_layer;

/// Raster buffer painted underneath every frame.
///
/// The layer is sized to the view and thrown away on every resize; a new
/// layer starts fully transparent. Committed strokes are replayed on top of it,
/// so nothing is lost when it is recreated.
pub struct CanvasSurface {
    surface: cairo::ImageSurface,
}

impl CanvasSurface {
    /// Allocates a transparent ARGB layer of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        log::debug!("Allocated {}x{} base layer", width, height);
        Ok(Self { surface })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Draws the layer onto `ctx` at the origin.
    pub fn paint_onto(&self, ctx: &cairo::Context) {
        render_layer(ctx, &self.surface);
    }
}

impl std::fmt::Debug for CanvasSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_layer_has_requested_dimensions() {
        let layer = CanvasSurface::new(320, 200).unwrap();
        assert_eq!((layer.width(), layer.height()), (320, 200));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert!(CanvasSurface::new(-1, 10).is_err());
    }
}
