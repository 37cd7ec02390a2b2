//! Core types shared by the input path and the engine boundary.

use serde::{Deserialize, Serialize};

/// A 2D position, either in screen pixels or in content (canvas) units
/// depending on where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor for [`Point`].
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Point {
    /// Midpoint between two points.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        point((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Direction of the vector from `self` to `other`, in radians.
    #[inline]
    pub fn angle_to(self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Rotate this point about `pivot` by `angle` radians.
    #[inline]
    pub fn rotate_about(self, pivot: Point, angle: f32) -> Point {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        point(dx * cos - dy * sin + pivot.x, dx * sin + dy * cos + pivot.y)
    }
}

/// Current affine viewport transform.
///
/// `screen = rotate(content * scale, angle) + (x, y)`. The scale is always
/// strictly positive; the angle is unbounded and wraps implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    pub scale: f32,
    pub angle: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformState {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        angle: 0.0,
        x: 0.0,
        y: 0.0,
    };

    /// Translation component as a point.
    #[inline]
    pub fn translation(&self) -> Point {
        point(self.x, self.y)
    }

    /// Reset to identity (viewport recreation).
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}

/// Named attachment point on a drawing engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    Viewport,
    ColorPicker,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Viewport => "viewport",
            Slot::ColorPicker => "color-picker",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
