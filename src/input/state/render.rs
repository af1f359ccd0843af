use crate::draw::{render_stroke, render_strokes};

use super::{DrawingState, DrawingSurface, SurfaceError};

impl DrawingSurface {
    /// Composites the drawing onto `ctx`.
    ///
    /// Paint order: the base layer, then every committed stroke in commit
    /// order with its own style, then the in-progress stroke on top.
    /// Rendering does not touch surface state, so repeated calls produce the
    /// same pixels.
    pub fn render(&self, ctx: &cairo::Context) {
        if let Some(base) = &self.base {
            base.paint_onto(ctx);
        }

        render_strokes(ctx, self.history.committed());

        if let DrawingState::Drawing { stroke } = &self.state {
            // Empty strokes are skipped by render_stroke.
            render_stroke(ctx, stroke);
        }
    }

    /// Renders the drawing into a new transparent image of the surface size.
    pub fn snapshot(&self) -> Result<cairo::ImageSurface, SurfaceError> {
        let (width, height) = self.size().ok_or(SurfaceError::NotSized)?;
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        {
            let ctx = cairo::Context::new(&image)?;
            self.render(&ctx);
        }
        image.flush();
        Ok(image)
    }
}
