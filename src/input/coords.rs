//! Coordinate conversion between screen and content space.
//!
//! The forward mapping used for rendering is scale, then rotate, then
//! translate. The inverse undoes those steps in reverse order.

use crate::types::{Point, TransformState, point};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a content-space position to screen space
    #[inline]
    pub fn content_to_screen(content: Point, t: &TransformState) -> Point {
        let (sin, cos) = t.angle.sin_cos();
        let sx = content.x * t.scale;
        let sy = content.y * t.scale;
        point(sx * cos - sy * sin + t.x, sx * sin + sy * cos + t.y)
    }

    /// Convert a screen position to content space
    #[inline]
    pub fn screen_to_content(screen: Point, t: &TransformState) -> Point {
        let tx = screen.x - t.x;
        let ty = screen.y - t.y;

        let (sin, cos) = (-t.angle).sin_cos();
        let rx = tx * cos - ty * sin;
        let ry = tx * sin + ty * cos;

        point(rx / t.scale, ry / t.scale)
    }
}

/// Shorthand for [`CoordinateConverter::content_to_screen`].
#[inline]
pub fn map_to_screen_space(content: Point, t: &TransformState) -> Point {
    CoordinateConverter::content_to_screen(content, t)
}

/// Shorthand for [`CoordinateConverter::screen_to_content`].
#[inline]
pub fn map_to_content_space(screen: Point, t: &TransformState) -> Point {
    CoordinateConverter::screen_to_content(screen, t)
}
