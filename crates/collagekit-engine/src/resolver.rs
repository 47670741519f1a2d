//! Region resolution: addresses to pixel bounds, pointers to addresses.
//!
//! The addressable space is a single index range over three layers, in
//! fixed precedence order: shape overlays first (rendered topmost), then
//! custom grid cells, then (only when neither exists) the legacy
//! uniform rows×cols grid computed arithmetically. The same resolver
//! serves click-to-select and drag-and-drop target resolution; drag
//! coordinates are converted to canvas space by the viewport first.

use collagekit_core::Point;

use crate::grid::GridCell;
use crate::overlay::{ShapeKind, ShapeRegion};

/// Absolute pixel bounds of a resolved region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub left: f64,
    pub top: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    /// Present when the region is a shape overlay.
    pub shape_kind: Option<ShapeKind>,
}

impl RegionBounds {
    fn from_fractions(
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        canvas_w: f64,
        canvas_h: f64,
        shape_kind: Option<ShapeKind>,
    ) -> Self {
        let left = x * canvas_w;
        let top = y * canvas_h;
        let width = w * canvas_w;
        let height = h * canvas_h;
        Self {
            left,
            top,
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
            width,
            height,
            shape_kind,
        }
    }
}

/// A borrowed view of the session's current layout, in resolution
/// precedence order.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pub shapes: &'a [ShapeRegion],
    pub cells: &'a [GridCell],
    /// Legacy uniform grid, only consulted when `cells` is empty.
    pub legacy_grid: Option<(u32, u32)>,
}

impl<'a> Layout<'a> {
    /// Total number of addressable regions.
    pub fn region_count(&self) -> usize {
        let grid = if self.cells.is_empty() {
            self.legacy_grid
                .map(|(rows, cols)| (rows * cols) as usize)
                .unwrap_or(0)
        } else {
            self.cells.len()
        };
        self.shapes.len() + grid
    }

    /// Computes the absolute pixel bounds of `address`.
    ///
    /// Shape indices come first, then grid cells, then the legacy grid.
    /// Out-of-range addresses return `None`.
    pub fn bounds_of(&self, address: usize, canvas_w: f64, canvas_h: f64) -> Option<RegionBounds> {
        if let Some(shape) = self.shapes.get(address) {
            return Some(RegionBounds::from_fractions(
                shape.x,
                shape.y,
                shape.width,
                shape.height,
                canvas_w,
                canvas_h,
                Some(shape.kind),
            ));
        }
        let grid_index = address - self.shapes.len();

        if !self.cells.is_empty() {
            let cell = self.cells.get(grid_index)?;
            return Some(RegionBounds::from_fractions(
                cell.x,
                cell.y,
                cell.width,
                cell.height,
                canvas_w,
                canvas_h,
                None,
            ));
        }

        let (rows, cols) = self.legacy_grid?;
        if rows == 0 || cols == 0 || grid_index >= (rows * cols) as usize {
            return None;
        }
        let cell_w = canvas_w / cols as f64;
        let cell_h = canvas_h / rows as f64;
        let row = grid_index / cols as usize;
        let col = grid_index % cols as usize;
        let left = col as f64 * cell_w;
        let top = row as f64 * cell_h;
        Some(RegionBounds {
            left,
            top,
            center_x: left + cell_w / 2.0,
            center_y: top + cell_h / 2.0,
            width: cell_w,
            height: cell_h,
            shape_kind: None,
        })
    }

    /// Resolves a canvas-space pointer position to a region address.
    ///
    /// Shapes are tested first by bounding box, in list order (first
    /// match wins; overlapping shapes resolve to the earlier entry).
    /// Then custom cells by point-in-rect, then the legacy grid by
    /// arithmetic division. Returns `None` only when nothing matches,
    /// which cannot happen over a tiled custom grid but can over an
    /// empty legacy-mode canvas.
    pub fn resolve_address(
        &self,
        x: f64,
        y: f64,
        canvas_w: f64,
        canvas_h: f64,
    ) -> Option<usize> {
        if canvas_w <= 0.0 || canvas_h <= 0.0 {
            return None;
        }
        let frac = Point::new(x / canvas_w, y / canvas_h);

        for (i, shape) in self.shapes.iter().enumerate() {
            if shape.rect().contains(frac) {
                return Some(i);
            }
        }

        if !self.cells.is_empty() {
            for (i, cell) in self.cells.iter().enumerate() {
                if cell.rect().contains(frac) {
                    return Some(self.shapes.len() + i);
                }
            }
            return None;
        }

        let (rows, cols) = self.legacy_grid?;
        if rows == 0 || cols == 0 {
            return None;
        }
        if x < 0.0 || y < 0.0 || x > canvas_w || y > canvas_h {
            return None;
        }
        let col = ((x / (canvas_w / cols as f64)) as usize).min(cols as usize - 1);
        let row = ((y / (canvas_h / rows as f64)) as usize).min(rows as usize - 1);
        let index = row * cols as usize + col;
        Some(self.shapes.len() + index)
    }
}
