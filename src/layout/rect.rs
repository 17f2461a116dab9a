//! Pixel rectangles.
//!
//! `Rect` is the integer rectangle the host draws and hit-tests with.
//! `RectF` is the float counterpart the kinematics math works in;
//! positions are computed in floats and rounded once, at the edge.

use serde::{Deserialize, Serialize};

/// An axis-aligned integer pixel rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The x coordinate one past the right edge.
    #[must_use]
    pub const fn right(self) -> i32 {
        self.x + self.w
    }

    /// The y coordinate one past the bottom edge.
    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.y + self.h
    }

    /// Check whether a point falls inside this rectangle.
    ///
    /// The left/top edges are inclusive, right/bottom exclusive, so
    /// adjacent rectangles never both claim a point.
    #[must_use]
    pub const fn contains(self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// The rectangle's center point.
    #[must_use]
    pub fn center(self) -> (f32, f32) {
        (
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    /// Check whether two rectangles overlap.
    #[must_use]
    pub const fn intersects(self, other: Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// A rectangle of the same size with its center at `(cx, cy)`.
    #[must_use]
    pub fn centered_at(self, cx: f32, cy: f32) -> Rect {
        RectF {
            x: cx - self.w as f32 / 2.0,
            y: cy - self.h as f32 / 2.0,
            w: self.w as f32,
            h: self.h as f32,
        }
        .to_pixel()
    }
}

/// A float rectangle used for intermediate kinematics math.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectF {
    /// Create a new float rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Round to the integer pixel rectangle.
    #[must_use]
    pub fn to_pixel(self) -> Rect {
        Rect {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            w: self.w.round() as i32,
            h: self.h.round() as i32,
        }
    }
}

impl From<Rect> for RectF {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x as f32,
            y: r.y as f32,
            w: r.w as f32,
            h: r.h as f32,
        }
    }
}
