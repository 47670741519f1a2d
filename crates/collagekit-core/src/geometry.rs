//! Fractional canvas geometry.
//!
//! All layout state lives in a unit coordinate space: positions and
//! sizes are fractions of the canvas in `[0, 1]`, scaled to pixels only
//! at resolution time. This keeps layouts portable across canvas sizes.

use serde::{Deserialize, Serialize};

/// A point in canvas or fractional space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle in fractional coordinates.
///
/// `x`/`y` are the top-left corner; all four fields are fractions of
/// canvas size in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FracRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FracRect {
    /// The full canvas.
    pub const UNIT: FracRect = FracRect {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Point-in-rect test. Edges count as inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    /// Whether the interiors of two rects overlap. Shared edges do not
    /// count as overlap (adjacent grid cells touch but never overlap).
    pub fn overlaps(&self, other: &FracRect) -> bool {
        const EPS: f64 = 1e-9;
        self.x + EPS < other.x + other.width
            && other.x + EPS < self.x + self.width
            && self.y + EPS < other.y + other.height
            && other.y + EPS < self.y + self.height
    }

    /// Clamps the rect's origin so the whole rect stays inside the unit
    /// square. Size is preserved; callers bound size separately.
    pub fn clamped_into_unit(&self) -> FracRect {
        let x = self.x.clamp(0.0, (1.0 - self.width).max(0.0));
        let y = self.y.clamp(0.0, (1.0 - self.height).max(0.0));
        FracRect::new(x, y, self.width, self.height)
    }
}
