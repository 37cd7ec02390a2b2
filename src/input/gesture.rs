//! Gesture interpretation - pointer batches to viewport transform deltas.
//!
//! One pointer pans. Two pointers apply, in this order and each anchored at
//! the current midpoint: translate by the midpoint delta, scale by the
//! change in finger spread, rotate by the change in finger direction.
//!
//! Touch samples are noisy and arrive at high frequency, so the per-batch
//! scale factor is clamped and small rotations are dropped. Nothing here can
//! fail: degenerate input (coincident fingers) falls out as "no change".

use super::event::{PointerAction, PointerBatch};
use super::state::GestureState;
use crate::constants::ROTATION_DEAD_ZONE;
use crate::settings::GestureSettings;
use crate::types::{Point, TransformState};
use std::f32::consts::{PI, TAU};
use tracing::{debug, warn};

/// Owns the gesture baselines and applies batches to a transform.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    state: GestureState,
    settings: GestureSettings,
}

impl GestureInterpreter {
    /// Interpreter with the given limits; invalid limits fall back to the defaults.
    pub fn new(settings: GestureSettings) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                warn!("Rejected gesture settings, using defaults: {}", e);
                GestureSettings::default()
            }
        };
        Self {
            state: GestureState::Idle,
            settings,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    /// Apply one batch to `transform` in place.
    pub fn handle(&mut self, batch: &PointerBatch, transform: &mut TransformState) {
        let (next, updated) = step(self.state, batch, *transform, &self.settings);

        if next.pointer_count() != self.state.pointer_count() {
            debug!(
                from = self.state.pointer_count(),
                to = next.pointer_count(),
                action = ?batch.action,
                "Gesture transition"
            );
        }

        self.state = next;
        *transform = updated;
    }

    /// Drop any in-progress gesture.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

/// Pure transition: `(state, batch, transform) -> (state', transform')`.
pub fn step(
    state: GestureState,
    batch: &PointerBatch,
    transform: TransformState,
    settings: &GestureSettings,
) -> (GestureState, TransformState) {
    match batch.action {
        PointerAction::Up | PointerAction::Cancel => return (GestureState::Idle, transform),
        PointerAction::Hover => return (state, transform),
        _ => {}
    }

    let pointers = &batch.pointers;
    match pointers.len() {
        0 => (state, transform),
        1 => step_one_pointer(state, batch.action, pointers[0].position, transform),
        2 => step_two_pointer(state, batch, transform, settings),
        _ => {
            // Only a lift back down to two pointers matters; re-baseline on
            // the pair that stays so the next move does not jump.
            if batch.action == PointerAction::PointerUp && pointers.len() == 3 {
                let mut remaining = pointers
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != batch.action_index)
                    .map(|(_, p)| p.position);
                if let (Some(a), Some(b)) = (remaining.next(), remaining.next()) {
                    return (GestureState::two_pointer(a, b), transform);
                }
            }
            (state, transform)
        }
    }
}

fn step_one_pointer(
    state: GestureState,
    action: PointerAction,
    position: Point,
    mut transform: TransformState,
) -> (GestureState, TransformState) {
    // A move without a pan baseline (or a down) only sets the anchor
    if let (PointerAction::Move, GestureState::OnePointer { pan_anchor }) = (action, state) {
        transform.x += position.x - pan_anchor.x;
        transform.y += position.y - pan_anchor.y;
    }
    (GestureState::OnePointer { pan_anchor: position }, transform)
}

fn step_two_pointer(
    state: GestureState,
    batch: &PointerBatch,
    transform: TransformState,
    settings: &GestureSettings,
) -> (GestureState, TransformState) {
    let a = batch.pointers[0].position;
    let b = batch.pointers[1].position;

    match (batch.action, state) {
        (PointerAction::PointerUp, _) => {
            let remaining = if batch.action_index == 0 { b } else { a };
            (GestureState::OnePointer { pan_anchor: remaining }, transform)
        }
        (
            PointerAction::Move,
            GestureState::TwoPointer {
                last_angle,
                last_distance,
                last_mid,
            },
        ) => apply_pinch(a, b, last_angle, last_distance, last_mid, transform, settings),
        _ => (GestureState::two_pointer(a, b), transform),
    }
}

fn apply_pinch(
    a: Point,
    b: Point,
    last_angle: f32,
    last_distance: f32,
    last_mid: Point,
    mut transform: TransformState,
    settings: &GestureSettings,
) -> (GestureState, TransformState) {
    let mid = a.midpoint(b);

    // Translate
    transform.x += mid.x - last_mid.x;
    transform.y += mid.y - last_mid.y;

    // Scale
    let distance = a.distance(b);
    let ratio = scale_step(last_distance, distance, settings);
    transform.x += (1.0 - ratio) * (mid.x - transform.x);
    transform.y += (1.0 - ratio) * (mid.y - transform.y);
    transform.scale *= ratio;

    // Rotate
    let angle = a.angle_to(b);
    let change = suppress_micro_rotation(normalize_angle(angle - last_angle), distance);
    let rotated = transform.translation().rotate_about(mid, change);
    transform.x = rotated.x;
    transform.y = rotated.y;
    transform.angle += change;

    let next = GestureState::TwoPointer {
        last_angle: angle,
        last_distance: distance,
        last_mid: mid,
    };
    (next, transform)
}

/// Per-batch scale factor for a change in finger spread.
///
/// Clamped to `[min_scale_step, max_scale_step]`. A zero baseline distance
/// produces a non-finite ratio, which is read as "no change".
pub fn scale_step(last_distance: f32, distance: f32, settings: &GestureSettings) -> f32 {
    let raw = 1.0 + ((distance - last_distance) / last_distance) * settings.scale_sensitivity;
    if !raw.is_finite() {
        return 1.0;
    }
    // Validated settings keep min_scale_step above DEGENERATE_SCALE_STEP, so
    // this floor leaves the near-zero snap to 0 unreachable.
    raw.max(settings.min_scale_step).min(settings.max_scale_step)
}

/// Zero out angle changes smaller than `ROTATION_DEAD_ZONE / distance`.
///
/// Wider finger spread gives a finer angular resolution, so the dead zone
/// shrinks as the fingers move apart.
pub fn suppress_micro_rotation(change: f32, distance: f32) -> f32 {
    if change.abs() < ROTATION_DEAD_ZONE / distance {
        0.0
    } else {
        change
    }
}

/// Map an angle difference into (-PI, PI].
fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle % TAU;
    if wrapped > PI {
        wrapped - TAU
    } else if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
