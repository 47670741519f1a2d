//! Clip geometry for resolved regions.
//!
//! A clip constrains an image to its region's outline without touching
//! the item's stored transform. Clips are always positioned in absolute
//! canvas coordinates, not item-local space, so a clipped image can be
//! dragged inside its region without the window moving with it. Text
//! items are never clipped; they float above cell boundaries.

use collagekit_core::Point;
use lyon::math::point;
use serde::{Deserialize, Serialize};
use lyon::path::{Path, Winding};

use crate::overlay::ShapeKind;
use crate::resolver::RegionBounds;

/// The clip outline for a resolved region, in absolute canvas pixels.
///
/// Serializable because placement bakes the clip into the scene item;
/// it is not re-derived from the layout unless the item is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ClipShape {
    /// Axis-aligned rectangle matching the region exactly.
    Rect {
        center: Point,
        width: f64,
        height: f64,
    },
    /// Inscribed circle, diameter `min(width, height)`.
    Circle { center: Point, diameter: f64 },
    /// Parametric heart silhouette scaled to the region's bounding box.
    Heart {
        center: Point,
        width: f64,
        height: f64,
    },
    /// Five-point star scaled to the region's bounding box.
    Star {
        center: Point,
        width: f64,
        height: f64,
    },
    /// Regular hexagon scaled to the region's bounding box.
    Hexagon {
        center: Point,
        width: f64,
        height: f64,
    },
}

impl ClipShape {
    /// Builds the clip for a resolved region. Grid cells and any
    /// unsupported kind get the rectangular clip.
    pub fn for_bounds(bounds: &RegionBounds) -> Self {
        let center = Point::new(bounds.center_x, bounds.center_y);
        match bounds.shape_kind {
            Some(ShapeKind::Circle) => ClipShape::Circle {
                center,
                diameter: bounds.width.min(bounds.height),
            },
            Some(ShapeKind::Heart) => ClipShape::Heart {
                center,
                width: bounds.width,
                height: bounds.height,
            },
            Some(ShapeKind::Star) => ClipShape::Star {
                center,
                width: bounds.width,
                height: bounds.height,
            },
            Some(ShapeKind::Hexagon) => ClipShape::Hexagon {
                center,
                width: bounds.width,
                height: bounds.height,
            },
            None => ClipShape::Rect {
                center,
                width: bounds.width,
                height: bounds.height,
            },
        }
    }

    /// Clips are positioned in absolute canvas coordinates.
    pub fn is_absolute_positioned(&self) -> bool {
        true
    }

    pub fn center(&self) -> Point {
        match *self {
            ClipShape::Rect { center, .. }
            | ClipShape::Circle { center, .. }
            | ClipShape::Heart { center, .. }
            | ClipShape::Star { center, .. }
            | ClipShape::Hexagon { center, .. } => center,
        }
    }

    /// Bounding box size of the clip outline.
    pub fn size(&self) -> (f64, f64) {
        match *self {
            ClipShape::Rect { width, height, .. }
            | ClipShape::Heart { width, height, .. }
            | ClipShape::Star { width, height, .. }
            | ClipShape::Hexagon { width, height, .. } => (width, height),
            ClipShape::Circle { diameter, .. } => (diameter, diameter),
        }
    }

    /// Renders the outline as a path for the host scene graph.
    pub fn to_path(&self) -> Path {
        match *self {
            ClipShape::Rect {
                center,
                width,
                height,
            } => {
                let mut builder = Path::builder();
                builder.add_rectangle(
                    &lyon::math::Box2D::new(
                        point(
                            (center.x - width / 2.0) as f32,
                            (center.y - height / 2.0) as f32,
                        ),
                        point(
                            (center.x + width / 2.0) as f32,
                            (center.y + height / 2.0) as f32,
                        ),
                    ),
                    Winding::Positive,
                );
                builder.build()
            }
            ClipShape::Circle { center, diameter } => {
                let mut builder = Path::builder();
                builder.add_circle(
                    point(center.x as f32, center.y as f32),
                    (diameter / 2.0) as f32,
                    Winding::Positive,
                );
                builder.build()
            }
            ClipShape::Heart {
                center,
                width,
                height,
            } => heart_path(center, width, height),
            ClipShape::Star {
                center,
                width,
                height,
            } => polygon_path(&star_points(center, width, height)),
            ClipShape::Hexagon {
                center,
                width,
                height,
            } => polygon_path(&hexagon_points(center, width, height)),
        }
    }
}

/// Heart silhouette: two cubic lobes meeting at a notch, tapering to the
/// bottom tip. Control points are fixed in a unit box and scaled to the
/// region, so the outline keeps its proportions at any size.
fn heart_path(center: Point, width: f64, height: f64) -> Path {
    // Unit-box coordinates, y down.
    const OUTLINE: [[(f64, f64); 3]; 6] = [
        [(0.5, 0.22), (0.42, 0.1), (0.3, 0.1)],
        [(0.12, 0.1), (0.05, 0.25), (0.05, 0.38)],
        [(0.05, 0.58), (0.26, 0.76), (0.5, 0.92)],
        [(0.74, 0.76), (0.95, 0.58), (0.95, 0.38)],
        [(0.95, 0.25), (0.88, 0.1), (0.7, 0.1)],
        [(0.58, 0.1), (0.5, 0.22), (0.5, 0.3)],
    ];

    let map = |(ux, uy): (f64, f64)| {
        point(
            (center.x + (ux - 0.5) * width) as f32,
            (center.y + (uy - 0.5) * height) as f32,
        )
    };

    let mut builder = Path::builder();
    builder.begin(map((0.5, 0.3)));
    for [c1, c2, end] in OUTLINE {
        builder.cubic_bezier_to(map(c1), map(c2), map(end));
    }
    builder.close();
    builder.build()
}

fn star_points(center: Point, width: f64, height: f64) -> Vec<Point> {
    // Five-point star, tip up, inner radius at 0.4 of the outer.
    let mut pts = Vec::with_capacity(10);
    for i in 0..10 {
        let angle = -std::f64::consts::FRAC_PI_2 + std::f64::consts::PI * (i as f64) / 5.0;
        let r = if i % 2 == 0 { 0.5 } else { 0.2 };
        pts.push(Point::new(
            center.x + r * width * angle.cos(),
            center.y + r * height * angle.sin(),
        ));
    }
    pts
}

fn hexagon_points(center: Point, width: f64, height: f64) -> Vec<Point> {
    let mut pts = Vec::with_capacity(6);
    for i in 0..6 {
        let angle = std::f64::consts::PI * (i as f64) / 3.0 - std::f64::consts::FRAC_PI_2;
        pts.push(Point::new(
            center.x + 0.5 * width * angle.cos(),
            center.y + 0.5 * height * angle.sin(),
        ));
    }
    pts
}

fn polygon_path(pts: &[Point]) -> Path {
    let mut builder = Path::builder();
    let mut iter = pts.iter();
    if let Some(first) = iter.next() {
        builder.begin(point(first.x as f32, first.y as f32));
        for p in iter {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.close();
    }
    builder.build()
}
