use super::*;
use crate::draw::{BLACK, Color, GREEN, RED};
use crate::input::{DrawingView, PointerEvent};

fn create_test_surface() -> DrawingSurface {
    let mut surface = DrawingSurface::new(BrushSettings {
        color: BLACK,
        thickness: 20.0,
    });
    surface.on_resize(100, 80).unwrap();
    surface
}

fn pixel_at(image: &mut cairo::ImageSurface, x: usize, y: usize) -> u32 {
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let offset = y * stride + x * 4;
    u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn snapshot_bytes(surface: &DrawingSurface) -> Vec<u8> {
    let mut image = surface.snapshot().unwrap();
    image.data().unwrap().to_vec()
}

fn draw_dot(surface: &mut DrawingSurface, x: f64, y: f64) {
    surface.on_pointer_down(x, y);
    surface.on_pointer_up();
}

#[test]
fn gesture_commits_one_stroke_with_points_in_order() {
    let mut surface = create_test_surface();

    surface.on_pointer_down(10.0, 10.0);
    surface.on_pointer_move(20.0, 20.0);
    surface.on_pointer_move(30.0, 10.0);
    surface.on_pointer_up();

    assert_eq!(surface.committed().len(), 1);
    let stroke = &surface.committed()[0];
    assert_eq!(stroke.points(), &[(10.0, 10.0), (20.0, 20.0), (30.0, 10.0)]);
    assert_eq!(stroke.color, BLACK);
    assert_eq!(stroke.thickness, 20.0);
    assert!(surface.current_stroke().is_none());
}

#[test]
fn each_completed_gesture_adds_exactly_one_stroke() {
    let mut surface = create_test_surface();
    for i in 0..5 {
        surface.on_pointer_down(i as f64, 0.0);
        for j in 0..i {
            surface.on_pointer_move(i as f64, j as f64);
        }
        surface.on_pointer_up();
        assert_eq!(surface.committed().len(), i + 1);
        assert_eq!(surface.committed()[i].len(), i + 1);
    }
}

#[test]
fn move_without_down_is_ignored() {
    let mut surface = create_test_surface();
    surface.take_redraw();

    surface.on_pointer_move(5.0, 5.0);

    assert!(surface.current_stroke().is_none());
    assert!(surface.committed().is_empty());
    assert!(!surface.needs_redraw);
}

#[test]
fn up_without_down_commits_nothing() {
    let mut surface = create_test_surface();
    surface.on_pointer_up();
    assert!(surface.committed().is_empty());
}

#[test]
fn single_point_gesture_is_committed() {
    let mut surface = create_test_surface();
    draw_dot(&mut surface, 50.0, 40.0);
    assert_eq!(surface.committed().len(), 1);
    assert_eq!(surface.committed()[0].points(), &[(50.0, 40.0)]);
}

#[test]
fn second_down_replaces_unfinished_stroke() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(1.0, 1.0);
    surface.on_pointer_move(2.0, 2.0);
    surface.on_pointer_down(9.0, 9.0);
    surface.on_pointer_up();

    assert_eq!(surface.committed().len(), 1);
    assert_eq!(surface.committed()[0].points(), &[(9.0, 9.0)]);
}

#[test]
fn handle_pointer_event_dispatches_and_rejects_cancel() {
    let mut surface = create_test_surface();

    assert!(surface.handle_pointer_event(PointerEvent::Down { x: 1.0, y: 2.0 }));
    assert!(surface.handle_pointer_event(PointerEvent::Move { x: 3.0, y: 4.0 }));
    assert!(!surface.handle_pointer_event(PointerEvent::Cancel));
    assert_eq!(surface.current_stroke().unwrap().len(), 2);
    assert!(surface.handle_pointer_event(PointerEvent::Up));

    assert_eq!(surface.committed()[0].points(), &[(1.0, 2.0), (3.0, 4.0)]);
}

#[test]
fn undo_n_times_leaves_m_minus_n_strokes() {
    let mut surface = create_test_surface();
    let colors = [RED, GREEN, BLACK, RED];
    for (i, color) in colors.iter().enumerate() {
        surface.set_color_value(*color);
        draw_dot(&mut surface, i as f64 * 10.0, 10.0);
    }

    surface.undo();
    surface.undo();
    surface.undo();

    assert_eq!(surface.committed().len(), 1);
    assert_eq!(surface.committed()[0].color, RED);
    let undone: Vec<Color> = surface.undone().iter().map(|s| s.color).collect();
    // Removed newest-first, so the stack holds them in reverse commit order.
    assert_eq!(undone, vec![RED, BLACK, GREEN]);
}

#[test]
fn undo_more_than_committed_just_empties_the_list() {
    let mut surface = create_test_surface();
    draw_dot(&mut surface, 1.0, 1.0);
    draw_dot(&mut surface, 2.0, 2.0);

    for _ in 0..5 {
        surface.undo();
    }

    assert!(surface.committed().is_empty());
    assert_eq!(surface.undone().len(), 2);
}

#[test]
fn undo_on_empty_history_requests_no_redraw() {
    let mut surface = create_test_surface();
    surface.take_redraw();
    surface.undo();
    assert!(!surface.take_redraw());
}

#[test]
fn undo_then_color_change_scenario() {
    let mut surface = create_test_surface();

    surface.set_color("#FF0000").unwrap();
    draw_dot(&mut surface, 10.0, 10.0);
    surface.set_color("#00FF00").unwrap();
    surface.undo();

    assert!(surface.committed().is_empty());
    assert_eq!(surface.undone().last().unwrap().color, RED);
}

#[test]
fn invalid_color_is_recoverable_and_keeps_settings() {
    let mut surface = create_test_surface();
    surface.set_color("#FF0000").unwrap();

    let err = surface.set_color("not-a-color").unwrap_err();

    assert!(matches!(err, SurfaceError::InvalidArgument(_)));
    assert_eq!(surface.settings().color, RED);
}

#[test]
fn brush_size_is_scaled_by_density() {
    let mut surface = create_test_surface();
    surface.set_brush_size(10.0, 2.5).unwrap();
    assert_eq!(surface.settings().thickness, 25.0);

    draw_dot(&mut surface, 1.0, 1.0);
    assert_eq!(surface.committed()[0].thickness, 25.0);
}

#[test]
fn invalid_brush_size_is_rejected() {
    let mut surface = create_test_surface();
    for (size, density) in [(0.0, 1.0), (-3.0, 1.0), (f64::NAN, 1.0), (10.0, 0.0)] {
        assert!(matches!(
            surface.set_brush_size(size, density),
            Err(SurfaceError::InvalidArgument(_))
        ));
    }
    assert_eq!(surface.settings().thickness, 20.0);
}

#[test]
fn settings_apply_to_in_progress_stroke_but_not_committed_ones() {
    let mut surface = create_test_surface();
    surface.set_color_value(RED);
    draw_dot(&mut surface, 10.0, 10.0);

    surface.on_pointer_down(50.0, 50.0);
    surface.set_color_value(GREEN);
    surface.set_brush_size(5.0, 1.0).unwrap();

    let current = surface.current_stroke().unwrap();
    assert_eq!(current.color, GREEN);
    assert_eq!(current.thickness, 5.0);
    assert_eq!(surface.committed()[0].color, RED);
    assert_eq!(surface.committed()[0].thickness, 20.0);
}

#[test]
fn render_is_idempotent() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(10.0, 10.0);
    surface.on_pointer_move(60.0, 40.0);
    surface.on_pointer_up();
    surface.on_pointer_down(80.0, 10.0);
    surface.on_pointer_move(20.0, 70.0);

    let first = snapshot_bytes(&surface);
    let second = snapshot_bytes(&surface);
    assert_eq!(first, second);
}

#[test]
fn committed_strokes_keep_their_color_after_settings_change() {
    let mut surface = create_test_surface();
    surface.set_color("#FF0000").unwrap();
    draw_dot(&mut surface, 30.0, 30.0);

    surface.set_color("#00FF00").unwrap();
    surface.set_brush_size(1.0, 1.0).unwrap();

    let mut image = surface.snapshot().unwrap();
    assert_eq!(pixel_at(&mut image, 30, 30), 0xFFFF0000);
    // Thickness 20 still applies: 8px away from the center is inside the dot.
    assert_eq!(pixel_at(&mut image, 38, 30), 0xFFFF0000);
}

#[test]
fn later_strokes_paint_over_earlier_ones() {
    let mut surface = create_test_surface();
    surface.set_color_value(RED);
    draw_dot(&mut surface, 40.0, 40.0);
    surface.set_color_value(GREEN);
    draw_dot(&mut surface, 40.0, 40.0);

    let mut image = surface.snapshot().unwrap();
    assert_eq!(pixel_at(&mut image, 40, 40), 0xFF00FF00);
}

#[test]
fn in_progress_stroke_is_rendered_on_top() {
    let mut surface = create_test_surface();
    surface.set_color_value(RED);
    draw_dot(&mut surface, 40.0, 40.0);
    surface.set_color_value(GREEN);
    surface.on_pointer_down(40.0, 40.0);

    let mut image = surface.snapshot().unwrap();
    assert_eq!(pixel_at(&mut image, 40, 40), 0xFF00FF00);
}

#[test]
fn undone_strokes_are_not_rendered() {
    let mut surface = create_test_surface();
    let blank = snapshot_bytes(&surface);

    draw_dot(&mut surface, 40.0, 40.0);
    surface.undo();

    assert_eq!(snapshot_bytes(&surface), blank);
}

#[test]
fn resize_recreates_base_and_keeps_replaying_strokes() {
    let mut surface = create_test_surface();
    surface.set_color_value(RED);
    draw_dot(&mut surface, 10.0, 10.0);

    surface.on_resize(200, 150).unwrap();

    assert_eq!(surface.size(), Some((200, 150)));
    let mut image = surface.snapshot().unwrap();
    assert_eq!((image.width(), image.height()), (200, 150));
    assert_eq!(pixel_at(&mut image, 10, 10), 0xFFFF0000);
}

#[test]
fn negative_resize_is_rejected() {
    let mut surface = create_test_surface();
    assert!(matches!(
        surface.on_resize(-5, 10),
        Err(SurfaceError::InvalidArgument(_))
    ));
    assert_eq!(surface.size(), Some((100, 80)));
}

#[test]
fn snapshot_before_resize_fails() {
    let surface = DrawingSurface::new(BrushSettings {
        color: BLACK,
        thickness: 1.0,
    });
    assert!(matches!(surface.snapshot(), Err(SurfaceError::NotSized)));
}

#[test]
fn drawing_view_trait_forwards_to_surface() {
    let mut surface = create_test_surface();
    {
        let view: &mut dyn DrawingView = &mut surface;
        view.on_resize(64, 64).unwrap();
        assert!(view.handle_pointer_event(PointerEvent::Down { x: 5.0, y: 5.0 }));
        assert!(view.handle_pointer_event(PointerEvent::Up));
    }
    assert_eq!(surface.size(), Some((64, 64)));
    assert_eq!(surface.committed().len(), 1);
}
