//! Cairo-based rendering functions for strokes and image layers.

use super::color::Color;
use super::stroke::Stroke;
use crate::config::BackgroundFit;

/// Fills the whole target with a solid color.
///
/// Used for the canvas fill under an exported drawing. Uses the `Source`
/// operator so translucent fills replace rather than blend.
pub fn fill_color(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Renders all strokes in order (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders one stroke as a round-capped, round-joined polyline.
///
/// Empty strokes draw nothing. A single-point stroke becomes a dot whose
/// diameter equals the stroke thickness.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    let points = stroke.points();
    let Some(&(x0, y0)) = points.first() else {
        return;
    };

    let _ = ctx.save();
    let color = stroke.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke.thickness);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x0, y0);
    if points.len() == 1 {
        // Zero-length segment: cairo paints the round cap as a dot.
        ctx.line_to(x0, y0);
    } else {
        for &(x, y) in &points[1..] {
            ctx.line_to(x, y);
        }
    }

    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Paints a raster layer at the origin without scaling.
pub fn render_layer(ctx: &cairo::Context, layer: &cairo::ImageSurface) {
    let _ = ctx.save();
    if ctx.set_source_surface(layer, 0.0, 0.0).is_ok() {
        let _ = ctx.paint();
    }
    let _ = ctx.restore();
}

/// Paints an image scaled into a `width` x `height` target.
pub fn render_image_fitted(
    ctx: &cairo::Context,
    image: &cairo::ImageSurface,
    fit: BackgroundFit,
    width: f64,
    height: f64,
) {
    let img_w = image.width() as f64;
    let img_h = image.height() as f64;
    if img_w <= 0.0 || img_h <= 0.0 || width <= 0.0 || height <= 0.0 {
        return;
    }

    let (sx, sy) = fit_scale(fit, img_w, img_h, width, height);
    let offset_x = (width - img_w * sx) / 2.0;
    let offset_y = (height - img_h * sy) / 2.0;

    let _ = ctx.save();
    ctx.rectangle(0.0, 0.0, width, height);
    ctx.clip();
    ctx.translate(offset_x, offset_y);
    ctx.scale(sx, sy);
    if ctx.set_source_surface(image, 0.0, 0.0).is_ok() {
        ctx.source().set_filter(cairo::Filter::Good);
        let _ = ctx.paint();
    }
    let _ = ctx.restore();
}

/// Horizontal and vertical scale factors for placing an image into a target.
pub(crate) fn fit_scale(
    fit: BackgroundFit,
    img_w: f64,
    img_h: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let sx = width / img_w;
    let sy = height / img_h;
    match fit {
        BackgroundFit::Stretch => (sx, sy),
        BackgroundFit::Cover => {
            let s = sx.max(sy);
            (s, s)
        }
        BackgroundFit::Contain => {
            let s = sx.min(sy);
            (s, s)
        }
    }
}
