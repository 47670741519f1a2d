//! Freely placed shape overlay regions.
//!
//! Shapes are independent of the grid tree: they may overlap cells and
//! each other, carry no tiling invariant, and render above the grid.
//! All coordinates are fractions of canvas size.

use collagekit_core::constants::{DEFAULT_SHAPE_SIZE, MAX_SHAPE_SIZE, MIN_SHAPE_SIZE};
use collagekit_core::FracRect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The shape kinds a user can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Heart,
    Star,
    Hexagon,
}

/// A placed shape overlay region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRegion {
    pub id: Uuid,
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ShapeRegion {
    pub fn rect(&self) -> FracRect {
        FracRect::new(self.x, self.y, self.width, self.height)
    }
}

/// Ordered store of shape overlays. List order is render order and
/// hit-test order (first match wins).
#[derive(Debug, Clone, Default)]
pub struct ShapeOverlayStore {
    shapes: Vec<ShapeRegion>,
}

impl ShapeOverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store from a deserialized document.
    pub fn from_regions(shapes: Vec<ShapeRegion>) -> Self {
        Self { shapes }
    }

    pub fn regions(&self) -> &[ShapeRegion] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&ShapeRegion> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Adds a shape of the default size centered on `(cx, cy)`, clamped
    /// so the region stays inside the unit square.
    pub fn add(&mut self, kind: ShapeKind, cx: f64, cy: f64) -> Uuid {
        let half = DEFAULT_SHAPE_SIZE / 2.0;
        let rect = FracRect::new(cx - half, cy - half, DEFAULT_SHAPE_SIZE, DEFAULT_SHAPE_SIZE)
            .clamped_into_unit();
        let id = Uuid::new_v4();
        self.shapes.push(ShapeRegion {
            id,
            kind,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        });
        id
    }

    /// Moves a shape's top-left corner, clamped so `x+w <= 1` and
    /// `y+h <= 1`. Unknown ids are silent no-ops.
    pub fn translate(&mut self, id: Uuid, new_x: f64, new_y: f64) {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            tracing::debug!(%id, "translate ignored: unknown shape");
            return;
        };
        shape.x = new_x.clamp(0.0, 1.0 - shape.width);
        shape.y = new_y.clamp(0.0, 1.0 - shape.height);
    }

    /// Resizes a shape from its fixed origin toward the pointer.
    ///
    /// The new size is uniform: `max(px - x, py - y)` clamped to
    /// `[MIN_SHAPE_SIZE, MAX_SHAPE_SIZE]`, then clamped again so the
    /// shape does not extend past the canvas.
    pub fn resize(&mut self, id: Uuid, pointer_x: f64, pointer_y: f64) {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            tracing::debug!(%id, "resize ignored: unknown shape");
            return;
        };
        let size = (pointer_x - shape.x)
            .max(pointer_y - shape.y)
            .clamp(MIN_SHAPE_SIZE, MAX_SHAPE_SIZE);
        let size = size.min(1.0 - shape.x).min(1.0 - shape.y);
        shape.width = size;
        shape.height = size;
    }

    /// Removes a shape. Unknown ids are silent no-ops.
    pub fn remove(&mut self, id: Uuid) {
        self.shapes.retain(|s| s.id != id);
    }
}
