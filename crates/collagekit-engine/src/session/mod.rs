//! The editor session: single owner of all mutable collage state.
//!
//! Every mutation entry point runs the same epilogue: re-flatten the
//! grid (with the dedup guard), regenerate the ephemeral decorations,
//! enforce stacking order, and touch the save scheduler. Hosts drive the
//! session from their event loop and call [`EditorSession::poll_save`]
//! each tick to pick up debounced snapshots.

pub mod export;
pub mod persistence;

use std::time::Instant;

use collagekit_core::FracRect;
use uuid::Uuid;

use crate::clip::ClipShape;
use crate::document::{DocumentSnapshot, GridVisualConfig, LayoutDescriptor};
use crate::filters::{FilterKind, ImageFilter};
use crate::grid::{GridTree, SplitDirection};
use crate::overlay::{ShapeKind, ShapeOverlayStore};
use crate::resolver::{Layout, RegionBounds};
use crate::scene::{ItemTransform, SceneItem};
use crate::session::export::CaptureSpec;
use crate::session::persistence::SaveScheduler;
use crate::stacking;

/// Which grid system is live. Restored legacy documents stay in legacy
/// mode until the grid is reset; there is no automatic migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GridMode {
    Custom,
    Legacy { rows: u32, cols: u32 },
}

/// One open collage document being edited.
#[derive(Debug, Clone)]
pub struct EditorSession {
    canvas_width: f64,
    canvas_height: f64,
    tree: GridTree,
    shapes: ShapeOverlayStore,
    items: Vec<SceneItem>,
    grid_config: GridVisualConfig,
    active_address: Option<usize>,
    mode: GridMode,
    scheduler: SaveScheduler,
}

impl EditorSession {
    /// A fresh session: one full-canvas cell, no content.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        let mut session = Self {
            canvas_width,
            canvas_height,
            tree: GridTree::new(),
            shapes: ShapeOverlayStore::new(),
            items: Vec::new(),
            grid_config: GridVisualConfig::default(),
            active_address: None,
            mode: GridMode::Custom,
            scheduler: SaveScheduler::new(),
        };
        session.tree.sync();
        session.refresh_decorations();
        session
    }

    /// Rebuilds a session from a saved document, including the legacy
    /// layout shapes.
    pub fn from_snapshot(
        snapshot: &DocumentSnapshot,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Self {
        let (tree, shapes, mode) = match &snapshot.layout {
            LayoutDescriptor::CustomGridWithShapes { cells, shapes } => (
                GridTree::from_cells(cells),
                ShapeOverlayStore::from_regions(shapes.clone()),
                GridMode::Custom,
            ),
            LayoutDescriptor::CustomGrid { cells } => (
                GridTree::from_cells(cells),
                ShapeOverlayStore::new(),
                GridMode::Custom,
            ),
            LayoutDescriptor::Legacy { rows, cols } => (
                GridTree::new(),
                ShapeOverlayStore::new(),
                GridMode::Legacy {
                    rows: *rows,
                    cols: *cols,
                },
            ),
        };
        let mut session = Self {
            canvas_width,
            canvas_height,
            tree,
            shapes,
            items: snapshot.objects.clone(),
            grid_config: snapshot.grid_config.clone(),
            active_address: None,
            mode,
            scheduler: SaveScheduler::new(),
        };
        session.tree.sync();
        session.refresh_decorations();
        session
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn grid(&self) -> &GridTree {
        &self.tree
    }

    pub fn shapes(&self) -> &ShapeOverlayStore {
        &self.shapes
    }

    pub fn grid_config(&self) -> &GridVisualConfig {
        &self.grid_config
    }

    pub fn active_address(&self) -> Option<usize> {
        self.active_address
    }

    /// The current layout in resolution precedence order.
    pub fn layout(&self) -> Layout<'_> {
        match self.mode {
            GridMode::Custom => Layout {
                shapes: self.shapes.regions(),
                cells: self.tree.cells(),
                legacy_grid: None,
            },
            GridMode::Legacy { rows, cols } => Layout {
                shapes: self.shapes.regions(),
                cells: &[],
                legacy_grid: Some((rows, cols)),
            },
        }
    }

    pub fn region_count(&self) -> usize {
        self.layout().region_count()
    }

    /// Pixel bounds of a region address on the native canvas.
    pub fn region_bounds(&self, address: usize) -> Option<RegionBounds> {
        self.layout()
            .bounds_of(address, self.canvas_width, self.canvas_height)
    }

    /// Resolves a native-canvas point to a region address.
    pub fn resolve_address(&self, x: f64, y: f64) -> Option<usize> {
        self.layout()
            .resolve_address(x, y, self.canvas_width, self.canvas_height)
    }

    // --- mutations -------------------------------------------------

    /// Places an image into a region: centered, scaled to cover, clip
    /// baked from the region outline. Returns `None` for an out-of-range
    /// address.
    pub fn add_image_to_address(
        &mut self,
        src: impl Into<String>,
        natural_width: f64,
        natural_height: f64,
        address: usize,
    ) -> Option<Uuid> {
        let bounds = self.region_bounds(address)?;
        let scale = if natural_width > 0.0 && natural_height > 0.0 {
            (bounds.width / natural_width).max(bounds.height / natural_height)
        } else {
            1.0
        };
        let transform = ItemTransform::at(bounds.center_x, bounds.center_y).with_scale(scale);
        let item = SceneItem::image(src, transform, Some(ClipShape::for_bounds(&bounds)));
        let id = item.id;
        self.items.push(item);
        self.scene_mutated();
        Some(id)
    }

    /// Places a text item centered on a region. Text is never clipped.
    pub fn add_text_to_address(
        &mut self,
        content: impl Into<String>,
        address: usize,
    ) -> Option<Uuid> {
        let bounds = self.region_bounds(address)?;
        let item = SceneItem::text(content, ItemTransform::at(bounds.center_x, bounds.center_y));
        let id = item.id;
        self.items.push(item);
        self.scene_mutated();
        Some(id)
    }

    /// Splits a grid leaf. No-op in legacy mode and on stale ids.
    pub fn split_region(&mut self, node_id: u64, direction: SplitDirection) {
        if let GridMode::Legacy { .. } = self.mode {
            tracing::debug!(node_id, "split ignored: session is in legacy grid mode");
            return;
        }
        self.tree.split(node_id, direction);
        self.grid_mutated();
    }

    /// Adjusts a split's ratio (clamped). No-op in legacy mode.
    pub fn set_region_ratio(&mut self, node_id: u64, ratio: f64) {
        if let GridMode::Legacy { .. } = self.mode {
            tracing::debug!(node_id, "set_ratio ignored: session is in legacy grid mode");
            return;
        }
        self.tree.set_ratio(node_id, ratio);
        self.grid_mutated();
    }

    /// Resets to a single full-canvas cell. A legacy session becomes a
    /// custom-grid session here; this is the only migration path.
    pub fn reset_grid(&mut self) {
        self.tree.reset();
        self.mode = GridMode::Custom;
        self.active_address = None;
        self.grid_mutated();
    }

    /// Adds a shape overlay centered on a fractional canvas point.
    pub fn add_shape(&mut self, kind: ShapeKind, cx: f64, cy: f64) -> Uuid {
        let id = self.shapes.add(kind, cx, cy);
        self.scene_mutated();
        id
    }

    pub fn move_shape(&mut self, id: Uuid, x: f64, y: f64) {
        self.shapes.translate(id, x, y);
        self.scene_mutated();
    }

    pub fn resize_shape(&mut self, id: Uuid, pointer_x: f64, pointer_y: f64) {
        self.shapes.resize(id, pointer_x, pointer_y);
        self.scene_mutated();
    }

    pub fn remove_shape(&mut self, id: Uuid) {
        self.shapes.remove(id);
        self.scene_mutated();
    }

    /// Replaces an item's transform. Unknown ids are silent no-ops.
    pub fn update_transform(&mut self, id: Uuid, transform: ItemTransform) {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            tracing::debug!(%id, "update_transform ignored: unknown item");
            return;
        };
        item.transform = transform;
        self.scene_mutated();
    }

    /// Applies a filter to an image item (replace-by-kind semantics).
    /// No-op on text and unknown ids.
    pub fn apply_filter(&mut self, id: Uuid, filter: ImageFilter) {
        let Some(filters) = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .and_then(|i| i.filters_mut())
        else {
            tracing::debug!(%id, "apply_filter ignored: not an image item");
            return;
        };
        filters.apply(filter);
        self.scene_mutated();
    }

    pub fn remove_filter(&mut self, id: Uuid, kind: FilterKind) {
        let Some(filters) = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .and_then(|i| i.filters_mut())
        else {
            tracing::debug!(%id, "remove_filter ignored: not an image item");
            return;
        };
        filters.remove(kind);
        self.scene_mutated();
    }

    pub fn update_grid_config(&mut self, config: GridVisualConfig) {
        self.grid_config = config;
        self.scene_mutated();
    }

    /// Raises an item to the top of its stacking layer.
    pub fn bring_to_front(&mut self, id: Uuid) {
        stacking::bring_to_front(&mut self.items, id);
        self.scheduler.touch(Instant::now());
    }

    pub fn remove_item(&mut self, id: Uuid) {
        self.items.retain(|i| i.id != id);
        self.scene_mutated();
    }

    /// Selects the active region (drives the highlight decoration).
    /// Selection is not a document change and does not schedule a save.
    pub fn set_active_address(&mut self, address: Option<usize>) {
        self.active_address = address.filter(|a| *a < self.region_count());
        self.refresh_decorations();
    }

    // --- persistence -----------------------------------------------

    /// Captures the current document (ephemeral items excluded).
    pub fn snapshot(&self) -> DocumentSnapshot {
        let layout = match self.mode {
            GridMode::Custom if !self.shapes.is_empty() => LayoutDescriptor::CustomGridWithShapes {
                cells: self.tree.flatten(),
                shapes: self.shapes.regions().to_vec(),
            },
            GridMode::Custom => LayoutDescriptor::CustomGrid {
                cells: self.tree.flatten(),
            },
            GridMode::Legacy { rows, cols } => LayoutDescriptor::Legacy { rows, cols },
        };
        DocumentSnapshot::capture(&self.items, layout, self.grid_config.clone())
    }

    /// Returns the debounced snapshot once the quiescence window has
    /// passed, at most once per window.
    pub fn poll_save(&mut self, now: Instant) -> Option<DocumentSnapshot> {
        if self.scheduler.poll(now) {
            Some(self.snapshot())
        } else {
            None
        }
    }

    pub fn has_pending_save(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Drops any pending save. Called on teardown.
    pub fn cancel_pending_save(&mut self) {
        self.scheduler.cancel();
    }

    /// Capture request for a full-quality export.
    pub fn export_spec(&self) -> CaptureSpec {
        export::export_spec(&self.items)
    }

    /// Capture request for the autosave thumbnail.
    pub fn thumbnail_spec(&self) -> CaptureSpec {
        export::thumbnail_spec(&self.items)
    }

    // --- epilogue --------------------------------------------------

    fn grid_mutated(&mut self) {
        if self.tree.sync() {
            self.refresh_decorations();
            self.scheduler.touch(Instant::now());
        }
    }

    fn scene_mutated(&mut self) {
        self.tree.sync();
        self.refresh_decorations();
        self.scheduler.touch(Instant::now());
    }

    /// Throws away and rebuilds every ephemeral item from the current
    /// layout, then re-enforces stacking order.
    fn refresh_decorations(&mut self) {
        let mut cell_rects: Vec<FracRect> = Vec::new();
        match self.mode {
            GridMode::Custom => {
                cell_rects.extend(self.tree.cells().iter().map(|c| c.rect()));
            }
            GridMode::Legacy { rows, cols } if rows > 0 && cols > 0 => {
                let (w, h) = (1.0 / cols as f64, 1.0 / rows as f64);
                for row in 0..rows {
                    for col in 0..cols {
                        cell_rects.push(FracRect::new(col as f64 * w, row as f64 * h, w, h));
                    }
                }
            }
            GridMode::Legacy { .. } => {}
        }
        let shape_rects: Vec<(ShapeKind, FracRect)> = self
            .shapes
            .regions()
            .iter()
            .map(|s| (s.kind, s.rect()))
            .collect();
        // Resolving against a unit canvas yields fractional bounds.
        let highlight = self
            .active_address
            .and_then(|addr| self.layout().bounds_of(addr, 1.0, 1.0))
            .map(|b| FracRect::new(b.left, b.top, b.width, b.height));
        if self.active_address.is_some() && highlight.is_none() {
            self.active_address = None;
        }

        self.items.retain(|i| !i.is_ephemeral());
        for rect in cell_rects {
            self.items.push(SceneItem::grid_border(rect));
        }
        for (kind, rect) in shape_rects {
            self.items.push(SceneItem::shape_border(kind, rect));
        }
        if let Some(rect) = highlight {
            self.items.push(SceneItem::highlight(rect));
        }
        stacking::enforce(&mut self.items);
    }
}
