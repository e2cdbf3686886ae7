#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in frame-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by a relative movement.
    #[must_use]
    pub fn offset(self, delta: Delta) -> Self {
        Self { x: self.x + delta.dx, y: self.y + delta.dy }
    }
}

/// Relative pointer movement between two consecutive events.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Rotate clockwise (screen space, y down) by a multiple of 90 degrees.
    ///
    /// Negative degrees rotate counter-clockwise. Quarter turns are exact, so
    /// no trigonometry is involved.
    #[must_use]
    pub fn rotate_quarters(self, degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            90 => Self::new(-self.dy, self.dx),
            180 => Self::new(-self.dx, -self.dy),
            270 => Self::new(self.dy, -self.dx),
            _ => self,
        }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height, or `None` for a degenerate height.
    #[must_use]
    pub fn aspect(self) -> Option<f64> {
        if self.height == 0.0 { None } else { Some(self.width / self.height) }
    }
}

/// Axis-aligned rectangle in frame-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Map a frame point into this rectangle's unrotated coordinate space,
    /// undoing a clockwise quarter-turn rotation about the centre.
    #[must_use]
    pub fn to_local(&self, pt: Point, rotation_deg: u16) -> Point {
        let c = self.center();
        let d = Delta::new(pt.x - c.x, pt.y - c.y).rotate_quarters(-i32::from(rotation_deg));
        c.offset(d)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }

    /// Bounding box after a quarter-turn rotation about the centre.
    ///
    /// Rotations of 90 and 270 degrees swap the extents; 0 and 180 leave the
    /// box unchanged.
    #[must_use]
    pub fn rotated_bounds(&self, rotation_deg: u16) -> Rect {
        if rotation_deg % 180 == 90 {
            let c = self.center();
            Rect::new(c.x - self.height / 2.0, c.y - self.width / 2.0, self.height, self.width)
        } else {
            *self
        }
    }
}
