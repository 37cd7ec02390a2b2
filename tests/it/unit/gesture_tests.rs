//! Gesture interpreter tests driven through the public API.

use crate::helpers::{finger, fingers};
use paint_viewport::input::{GestureInterpreter, GestureState, PointerAction, step};
use paint_viewport::{GestureSettings, TransformState, point};

fn spread(interp: &mut GestureInterpreter, t: &mut TransformState, half: f32) {
    interp.handle(&fingers(PointerAction::Move, (-half, 0.0), (half, 0.0), 0), t);
}

#[test]
fn test_pan_accumulates_across_moves() {
    let mut interp = GestureInterpreter::default();
    let mut t = TransformState::IDENTITY;

    interp.handle(&finger(PointerAction::Down, 0.0, 0.0), &mut t);
    interp.handle(&finger(PointerAction::Move, 10.0, 5.0), &mut t);
    interp.handle(&finger(PointerAction::Move, 25.0, -5.0), &mut t);
    interp.handle(&finger(PointerAction::Up, 25.0, -5.0), &mut t);

    assert_eq!((t.x, t.y), (25.0, -5.0));
    assert_eq!(t.scale, 1.0);
    assert!(interp.state().is_idle());
}

#[test]
fn test_move_without_down_only_sets_anchor() {
    let mut interp = GestureInterpreter::default();
    let mut t = TransformState::IDENTITY;

    interp.handle(&finger(PointerAction::Move, 40.0, 40.0), &mut t);
    assert_eq!(t, TransformState::IDENTITY);
    assert!(interp.state().is_panning());

    interp.handle(&finger(PointerAction::Move, 45.0, 40.0), &mut t);
    assert_eq!(t.x, 5.0);
}

#[test]
fn test_sustained_pinch_out_is_rate_limited() {
    let mut interp = GestureInterpreter::default();
    let mut t = TransformState::IDENTITY;

    interp.handle(&fingers(PointerAction::PointerDown, (-10.0, 0.0), (10.0, 0.0), 1), &mut t);
    let mut half = 10.0;
    for _ in 0..10 {
        half *= 2.0;
        spread(&mut interp, &mut t, half);
    }

    let expected = 1.05_f32.powi(10);
    assert!((t.scale - expected).abs() < 1e-4, "scale {}", t.scale);
    // Midpoint stays at the origin, so the origin stays put
    assert!(t.x.abs() < 1e-4 && t.y.abs() < 1e-4);
    assert_eq!(t.angle, 0.0);
}

#[test]
fn test_sustained_pinch_in_stays_positive() {
    let mut interp = GestureInterpreter::default();
    let mut t = TransformState::IDENTITY;

    interp.handle(&fingers(PointerAction::PointerDown, (-500.0, 0.0), (500.0, 0.0), 1), &mut t);
    let mut half = 500.0;
    for _ in 0..200 {
        half *= 0.5;
        spread(&mut interp, &mut t, half);
        assert!(t.scale > 0.0 && t.scale.is_finite());
    }
    // Fingers end up coincident in f32; later batches read as "no change"
    assert!(t.scale < 1.0);
}

#[test]
fn test_custom_limits_are_honoured() {
    let settings = GestureSettings {
        scale_sensitivity: 1.0,
        min_scale_step: 0.5,
        max_scale_step: 2.0,
    };
    let mut interp = GestureInterpreter::new(settings);
    let mut t = TransformState::IDENTITY;

    interp.handle(&fingers(PointerAction::PointerDown, (-10.0, 0.0), (10.0, 0.0), 1), &mut t);
    spread(&mut interp, &mut t, 15.0);

    assert!((t.scale - 1.5).abs() < 1e-5, "scale {}", t.scale);
}

#[test]
fn test_step_is_pure() {
    let settings = GestureSettings::default();
    let state = GestureState::two_pointer(point(0.0, 0.0), point(100.0, 0.0));
    let batch = fingers(PointerAction::Move, (5.0, 3.0), (120.0, 40.0), 0);
    let t = TransformState {
        scale: 1.5,
        angle: 0.2,
        x: -30.0,
        y: 12.0,
    };

    let first = step(state, &batch, t, &settings);
    let second = step(state, &batch, t, &settings);
    assert_eq!(first, second);
}

#[test]
fn test_pinch_then_lift_then_pan() {
    let mut interp = GestureInterpreter::default();
    let mut t = TransformState::IDENTITY;

    interp.handle(&finger(PointerAction::Down, 0.0, 0.0), &mut t);
    interp.handle(&fingers(PointerAction::PointerDown, (0.0, 0.0), (100.0, 0.0), 1), &mut t);
    interp.handle(&fingers(PointerAction::Move, (10.0, 0.0), (110.0, 0.0), 0), &mut t);
    assert_eq!((t.x, t.y), (10.0, 0.0));

    // First finger lifts; the second keeps panning without a jump
    interp.handle(&fingers(PointerAction::PointerUp, (10.0, 0.0), (110.0, 0.0), 0), &mut t);
    assert_eq!(interp.state().pan_anchor(), Some(point(110.0, 0.0)));

    interp.handle(&finger(PointerAction::Move, 115.0, 0.0), &mut t);
    assert_eq!((t.x, t.y), (15.0, 0.0));
}

#[test]
fn test_cancel_returns_to_idle_and_keeps_transform() {
    let mut interp = GestureInterpreter::default();
    let mut t = TransformState::IDENTITY;

    interp.handle(&finger(PointerAction::Down, 0.0, 0.0), &mut t);
    interp.handle(&finger(PointerAction::Move, 8.0, 8.0), &mut t);
    interp.handle(&finger(PointerAction::Cancel, 8.0, 8.0), &mut t);

    assert!(interp.state().is_idle());
    assert_eq!((t.x, t.y), (8.0, 8.0));
}
