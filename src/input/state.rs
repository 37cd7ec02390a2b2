//! Gesture state machine - per-gesture baselines for pan, pinch and twist.
//!
//! A single explicit enum replaces loose `last_*` fields, so a baseline only
//! exists while the pointer count it belongs to is active.
//!
//! ## State Transitions
//!
//! ```text
//! Idle       -> OnePointer   (down, 0 -> 1)
//! OnePointer -> TwoPointer   (pointer-down, 1 -> 2)
//! TwoPointer -> OnePointer   (pointer-up, 2 -> 1; anchor = remaining pointer)
//! Any        -> Idle         (up or cancel, any -> 0)
//! ```

use crate::types::Point;

/// Baselines for the gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No pointer down
    #[default]
    Idle,

    /// Single-pointer pan
    OnePointer {
        /// Position the next move is measured from
        pan_anchor: Point,
    },

    /// Two-pointer pan, pinch and twist
    TwoPointer {
        /// Direction from the first to the second pointer, radians
        last_angle: f32,
        /// Distance between the pointers
        last_distance: f32,
        /// Midpoint between the pointers
        last_mid: Point,
    },
}

impl GestureState {
    /// Baseline for a two-pointer gesture from the current pointer pair.
    pub fn two_pointer(a: Point, b: Point) -> Self {
        Self::TwoPointer {
            last_angle: a.angle_to(b),
            last_distance: a.distance(b),
            last_mid: a.midpoint(b),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::OnePointer { .. })
    }

    pub fn is_two_pointer(&self) -> bool {
        matches!(self, Self::TwoPointer { .. })
    }

    /// Get the pan anchor, if a single-pointer pan is active
    pub fn pan_anchor(&self) -> Option<Point> {
        match self {
            Self::OnePointer { pan_anchor } => Some(*pan_anchor),
            _ => None,
        }
    }

    /// Number of pointers this state tracks
    pub fn pointer_count(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::OnePointer { .. } => 1,
            Self::TwoPointer { .. } => 2,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
