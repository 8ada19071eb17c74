//! Circle geometry for the wheel surface.
//!
//! Coordinates use the widget's own system: the origin is the top-left
//! corner of the square bounding box of side `2 * radius`, so the wheel
//! center sits at `(radius, radius)`.

use serde::{Deserialize, Serialize};

/// A 2D point in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The center of a wheel of the given radius.
    pub fn wheel_center(radius: f64) -> Self {
        Self::new(radius, radius)
    }

    /// Offset from the wheel center.
    pub fn offset_from_center(&self, radius: f64) -> (f64, f64) {
        (self.x - radius, self.y - radius)
    }

    /// Distance from the wheel center.
    pub fn distance_from_center(&self, radius: f64) -> f64 {
        let (dx, dy) = self.offset_from_center(radius);
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether the point lies strictly inside the wheel.
    pub fn is_inside_circle(&self, radius: f64) -> bool {
        let (dx, dy) = self.offset_from_center(radius);
        dx * dx + dy * dy < radius * radius
    }

    /// Clamp the point to the wheel.
    ///
    /// Points already inside are returned unchanged; points outside are
    /// projected radially onto the boundary.
    pub fn clamp_to_circle(self, radius: f64) -> Point {
        if self.is_inside_circle(radius) {
            return self;
        }

        let (dx, dy) = self.offset_from_center(radius);
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            // Degenerate zero radius; nothing to project.
            return self;
        }
        let scale = radius / len;

        Point::new(radius + dx * scale, radius + dy * scale)
    }
}
