use easel::{CanvasSurface, PointerHandler, Primitive, ShapeKind, FIXED_SHAPE_DIAMETER};
use egui::{Color32, Pos2};

fn canvas_with(kind: ShapeKind) -> CanvasSurface {
    let mut canvas = CanvasSurface::new();
    canvas.set_shape(kind);
    canvas
}

#[test]
fn circle_is_finished_at_pointer_down() {
    let mut canvas = canvas_with(ShapeKind::Circle);
    let p = Pos2::new(40.0, 60.0);

    canvas.on_pointer_down(p);
    assert_eq!(canvas.primitives().len(), 1);
    match &canvas.primitives()[0] {
        Primitive::Ellipse {
            center, diameter, ..
        } => {
            assert_eq!(*center, p);
            assert_eq!(*diameter, FIXED_SHAPE_DIAMETER);
        }
        other => panic!("expected an ellipse, got {other:?}"),
    }

    // The gesture is already finalized: moving adds nothing and changes nothing.
    canvas.on_pointer_move(Pos2::new(90.0, 90.0));
    assert_eq!(canvas.primitives().len(), 1);
    match &canvas.primitives()[0] {
        Primitive::Ellipse { center, .. } => assert_eq!(*center, p),
        other => panic!("expected an ellipse, got {other:?}"),
    }
}

#[test]
fn freehand_appends_points_in_order() {
    let mut canvas = canvas_with(ShapeKind::Freehand);
    let p0 = Pos2::new(1.0, 1.0);
    let p1 = Pos2::new(2.0, 3.0);
    let p2 = Pos2::new(4.0, 5.0);

    canvas.on_pointer_down(p0);
    canvas.on_pointer_move(p1);
    canvas.on_pointer_move(p2);

    assert_eq!(canvas.primitives().len(), 1);
    match &canvas.primitives()[0] {
        Primitive::Polyline { points, .. } => assert_eq!(points, &vec![p0, p1, p2]),
        other => panic!("expected a polyline, got {other:?}"),
    }
}

#[test]
fn square_move_replaces_the_outline() {
    let mut canvas = canvas_with(ShapeKind::Square);
    let p0 = Pos2::new(30.0, 30.0);
    let p1 = Pos2::new(70.0, 50.0);

    canvas.on_pointer_down(p0);
    canvas.on_pointer_move(p1);

    let squares: Vec<_> = canvas
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::SquareOutline { center, side, .. } => Some((*center, *side)),
            _ => None,
        })
        .collect();
    assert_eq!(squares, vec![(p1, FIXED_SHAPE_DIAMETER)]);
}

#[test]
fn clear_empties_primitives_but_keeps_settings() {
    let mut canvas = canvas_with(ShapeKind::Square);
    canvas.set_brush_color(Color32::RED);
    canvas.set_line_width(7.0);

    canvas.on_pointer_down(Pos2::new(10.0, 10.0));
    canvas.on_pointer_up();
    canvas.set_shape(ShapeKind::Circle);
    canvas.on_pointer_down(Pos2::new(50.0, 50.0));
    assert_eq!(canvas.primitives().len(), 2);

    canvas.clear();
    assert!(canvas.primitives().is_empty());
    assert!(canvas.backdrop().is_none());
    assert_eq!(canvas.state().active_shape, ShapeKind::Circle);
    assert_eq!(canvas.state().brush_color, Color32::RED);
    assert_eq!(canvas.state().stroke_width, 7.0);
}

#[test]
fn brush_color_changes_are_not_retroactive() {
    let mut canvas = canvas_with(ShapeKind::Freehand);
    canvas.on_pointer_down(Pos2::new(0.0, 0.0));
    canvas.on_pointer_up();

    canvas.set_brush_color(Color32::RED);
    canvas.on_pointer_down(Pos2::new(10.0, 10.0));
    canvas.on_pointer_up();

    assert_eq!(canvas.primitives()[0].color(), Color32::BLACK);
    assert_eq!(canvas.primitives()[1].color(), Color32::RED);
}

#[test]
fn stroke_width_is_captured_at_pointer_down() {
    let mut canvas = canvas_with(ShapeKind::Freehand);
    canvas.set_line_width(3.0);
    canvas.on_pointer_down(Pos2::new(0.0, 0.0));
    canvas.set_line_width(9.0);
    canvas.on_pointer_move(Pos2::new(5.0, 5.0));
    canvas.on_pointer_up();

    match &canvas.primitives()[0] {
        Primitive::Polyline { width, .. } => assert_eq!(*width, 3.0),
        other => panic!("expected a polyline, got {other:?}"),
    }
}

#[test]
fn move_without_a_gesture_is_a_noop() {
    let mut canvas = canvas_with(ShapeKind::Freehand);
    canvas.on_pointer_move(Pos2::new(5.0, 5.0));
    assert!(canvas.primitives().is_empty());
}

#[test]
fn pointer_up_abandons_the_gesture() {
    let mut canvas = canvas_with(ShapeKind::Freehand);
    canvas.on_pointer_down(Pos2::new(0.0, 0.0));
    canvas.on_pointer_up();
    canvas.on_pointer_move(Pos2::new(5.0, 5.0));

    match &canvas.primitives()[0] {
        Primitive::Polyline { points, .. } => assert_eq!(points.len(), 1),
        other => panic!("expected a polyline, got {other:?}"),
    }
}

#[test]
fn nonpositive_line_width_is_rejected() {
    let mut canvas = CanvasSurface::new();
    canvas.set_line_width(0.0);
    assert_eq!(canvas.state().stroke_width, 2.0);
    canvas.set_line_width(-3.0);
    assert_eq!(canvas.state().stroke_width, 2.0);
}
