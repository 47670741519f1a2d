//! Binary space-partition tree for the collage grid.
//!
//! User split/resize gestures mutate the tree; flattening produces the
//! normalized cell list every other component consumes. Nodes live in an
//! arena and reference children by index, so a split never needs parent
//! back-pointers and the whole tree can be rebuilt without ownership
//! cycles.

use collagekit_core::constants::{MAX_RATIO, MIN_RATIO};
use collagekit_core::FracRect;
use serde::{Deserialize, Serialize};

/// Direction a split divides its region.
///
/// `Horizontal` partitions width (left/right children), `Vertical`
/// partitions height (top/bottom children).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

/// A flattened grid cell in fractional coordinates.
///
/// The id is the leaf node's id and stays stable across ratio changes;
/// the set of cells exactly tiles the unit square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GridCell {
    pub fn rect(&self) -> FracRect {
        FracRect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Leaf,
    Split {
        direction: SplitDirection,
        ratio: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone)]
struct Node {
    id: u64,
    kind: NodeKind,
}

/// The region tree. One instance per editor session.
#[derive(Debug, Clone)]
pub struct GridTree {
    nodes: Vec<Node>,
    root: usize,
    next_id: u64,
    last_emitted: Vec<GridCell>,
}

impl GridTree {
    /// Creates a tree with a single root leaf covering the canvas.
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: 0,
            next_id: 1,
            last_emitted: Vec::new(),
        };
        let id = tree.alloc_id();
        tree.nodes.push(Node {
            id,
            kind: NodeKind::Leaf,
        });
        tree
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn index_of(&self, node_id: u64) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == node_id)
    }

    /// Splits the leaf `node_id` in the given direction at ratio 0.5.
    ///
    /// The leaf's id is kept by the new split node; the two children are
    /// fresh leaves. A stale or non-leaf id is a silent no-op; these
    /// only arise from stale UI references.
    pub fn split(&mut self, node_id: u64, direction: SplitDirection) {
        let Some(idx) = self.index_of(node_id) else {
            tracing::debug!(node_id, "split ignored: unknown node");
            return;
        };
        if !matches!(self.nodes[idx].kind, NodeKind::Leaf) {
            tracing::debug!(node_id, "split ignored: not a leaf");
            return;
        }

        let left_id = self.alloc_id();
        let right_id = self.alloc_id();
        let left = self.nodes.len();
        self.nodes.push(Node {
            id: left_id,
            kind: NodeKind::Leaf,
        });
        let right = self.nodes.len();
        self.nodes.push(Node {
            id: right_id,
            kind: NodeKind::Leaf,
        });

        self.nodes[idx].kind = NodeKind::Split {
            direction,
            ratio: 0.5,
            left,
            right,
        };
    }

    /// Stores `clamp(ratio, MIN_RATIO, MAX_RATIO)` on the split
    /// `node_id`. The ratio is a continuous drag value, so out-of-range
    /// input clamps rather than errors. No-op on leaves or unknown ids.
    pub fn set_ratio(&mut self, node_id: u64, ratio: f64) {
        let Some(idx) = self.index_of(node_id) else {
            tracing::debug!(node_id, "set_ratio ignored: unknown node");
            return;
        };
        if let NodeKind::Split { ratio: r, .. } = &mut self.nodes[idx].kind {
            *r = ratio.clamp(MIN_RATIO, MAX_RATIO);
        } else {
            tracing::debug!(node_id, "set_ratio ignored: not a split");
        }
    }

    /// Replaces the tree with a single fresh leaf, discarding history.
    pub fn reset(&mut self) {
        self.nodes.clear();
        let id = self.alloc_id();
        self.nodes.push(Node {
            id,
            kind: NodeKind::Leaf,
        });
        self.root = 0;
    }

    /// Flattens the tree into cells tiling the unit square.
    ///
    /// Depth-first, left child before right, so the result order is
    /// stable and serves as the canonical region index order.
    pub fn flatten(&self) -> Vec<GridCell> {
        let mut cells = Vec::new();
        self.flatten_into(self.root, FracRect::UNIT, &mut cells);
        cells
    }

    fn flatten_into(&self, idx: usize, area: FracRect, out: &mut Vec<GridCell>) {
        match &self.nodes[idx].kind {
            NodeKind::Leaf => out.push(GridCell {
                id: self.nodes[idx].id,
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height,
            }),
            NodeKind::Split {
                direction,
                ratio,
                left,
                right,
            } => match direction {
                SplitDirection::Horizontal => {
                    let w1 = area.width * ratio;
                    self.flatten_into(
                        *left,
                        FracRect::new(area.x, area.y, w1, area.height),
                        out,
                    );
                    self.flatten_into(
                        *right,
                        FracRect::new(area.x + w1, area.y, area.width - w1, area.height),
                        out,
                    );
                }
                SplitDirection::Vertical => {
                    let h1 = area.height * ratio;
                    self.flatten_into(
                        *left,
                        FracRect::new(area.x, area.y, area.width, h1),
                        out,
                    );
                    self.flatten_into(
                        *right,
                        FracRect::new(area.x, area.y + h1, area.width, area.height - h1),
                        out,
                    );
                }
            },
        }
    }

    /// Re-flattens and reports whether the result changed structurally
    /// since the last emission.
    ///
    /// Downstream work (border regeneration, snapshot scheduling) keys
    /// off this guard; re-emitting an identical cell list caused update
    /// loops in earlier revisions.
    pub fn sync(&mut self) -> bool {
        let cells = self.flatten();
        if cells == self.last_emitted {
            return false;
        }
        self.last_emitted = cells;
        true
    }

    /// The most recently emitted cell list.
    pub fn cells(&self) -> &[GridCell] {
        &self.last_emitted
    }

    /// Number of leaves (equals the flattened cell count).
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Leaf))
            .count()
    }

    /// Number of split nodes. Always `leaf_count() - 1`.
    pub fn split_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Split { .. }))
            .count()
    }

    /// The root node's id (useful as the first split target on a blank
    /// canvas).
    pub fn root_id(&self) -> u64 {
        self.nodes[self.root].id
    }

    /// Ids of all current leaves, in canonical order.
    pub fn leaf_ids(&self) -> Vec<u64> {
        self.flatten().iter().map(|c| c.id).collect()
    }

    /// Ids of all current split nodes, in arena order.
    pub fn split_ids(&self) -> Vec<u64> {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Split { .. }))
            .map(|n| n.id)
            .collect()
    }
}

impl Default for GridTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstruction plan recovered from a flat cell list.
#[derive(Debug)]
enum Plan {
    Leaf,
    Split {
        direction: SplitDirection,
        ratio: f64,
        left: Box<Plan>,
        right: Box<Plan>,
    },
}

const RECONSTRUCT_EPS: f64 = 1e-6;

/// Recovers a split structure from flattened cells by searching for a
/// guillotine line that cleanly partitions the set. Any valid
/// decomposition reproduces the geometry; the recovered ratios may
/// differ from the edit history that produced the cells.
fn plan_from_cells(cells: &[GridCell], area: FracRect) -> Option<Plan> {
    match cells {
        [] => None,
        [cell] => {
            let matches_area = (cell.x - area.x).abs() < RECONSTRUCT_EPS
                && (cell.y - area.y).abs() < RECONSTRUCT_EPS
                && (cell.width - area.width).abs() < RECONSTRUCT_EPS
                && (cell.height - area.height).abs() < RECONSTRUCT_EPS;
            matches_area.then_some(Plan::Leaf)
        }
        _ => {
            for candidate in cells {
                let v = candidate.x + candidate.width;
                if v > area.x + RECONSTRUCT_EPS
                    && v < area.x + area.width - RECONSTRUCT_EPS
                    && cells
                        .iter()
                        .all(|c| c.x + c.width <= v + RECONSTRUCT_EPS || c.x >= v - RECONSTRUCT_EPS)
                {
                    let left: Vec<GridCell> =
                        cells.iter().filter(|c| c.x < v - RECONSTRUCT_EPS).copied().collect();
                    let right: Vec<GridCell> =
                        cells.iter().filter(|c| c.x >= v - RECONSTRUCT_EPS).copied().collect();
                    let left_area = FracRect::new(area.x, area.y, v - area.x, area.height);
                    let right_area =
                        FracRect::new(v, area.y, area.x + area.width - v, area.height);
                    if let (Some(l), Some(r)) = (
                        plan_from_cells(&left, left_area),
                        plan_from_cells(&right, right_area),
                    ) {
                        return Some(Plan::Split {
                            direction: SplitDirection::Horizontal,
                            ratio: (v - area.x) / area.width,
                            left: Box::new(l),
                            right: Box::new(r),
                        });
                    }
                }

                let h = candidate.y + candidate.height;
                if h > area.y + RECONSTRUCT_EPS
                    && h < area.y + area.height - RECONSTRUCT_EPS
                    && cells
                        .iter()
                        .all(|c| c.y + c.height <= h + RECONSTRUCT_EPS || c.y >= h - RECONSTRUCT_EPS)
                {
                    let top: Vec<GridCell> =
                        cells.iter().filter(|c| c.y < h - RECONSTRUCT_EPS).copied().collect();
                    let bottom: Vec<GridCell> =
                        cells.iter().filter(|c| c.y >= h - RECONSTRUCT_EPS).copied().collect();
                    let top_area = FracRect::new(area.x, area.y, area.width, h - area.y);
                    let bottom_area =
                        FracRect::new(area.x, h, area.width, area.y + area.height - h);
                    if let (Some(t), Some(b)) = (
                        plan_from_cells(&top, top_area),
                        plan_from_cells(&bottom, bottom_area),
                    ) {
                        return Some(Plan::Split {
                            direction: SplitDirection::Vertical,
                            ratio: (h - area.y) / area.height,
                            left: Box::new(t),
                            right: Box::new(b),
                        });
                    }
                }
            }
            None
        }
    }
}

impl GridTree {
    /// Rebuilds a tree from the persisted flat cell list.
    ///
    /// Node ids are reassigned; only geometry is stable across sessions.
    /// A cell list that is not a clean guillotine partition (hand-edited
    /// document) degrades to a single full-canvas cell with a warning.
    pub fn from_cells(cells: &[GridCell]) -> Self {
        match plan_from_cells(cells, FracRect::UNIT) {
            Some(plan) => {
                let mut tree = Self {
                    nodes: Vec::new(),
                    root: 0,
                    next_id: 1,
                    last_emitted: Vec::new(),
                };
                tree.build_plan(&plan);
                tree
            }
            None => {
                if !cells.is_empty() {
                    tracing::warn!(
                        cell_count = cells.len(),
                        "cell list does not partition the canvas, using one full cell"
                    );
                }
                Self::new()
            }
        }
    }

    fn build_plan(&mut self, plan: &Plan) -> usize {
        let id = self.alloc_id();
        let idx = self.nodes.len();
        self.nodes.push(Node {
            id,
            kind: NodeKind::Leaf,
        });
        if let Plan::Split {
            direction,
            ratio,
            left,
            right,
        } = plan
        {
            let left_idx = self.build_plan(left);
            let right_idx = self.build_plan(right);
            self.nodes[idx].kind = NodeKind::Split {
                direction: *direction,
                ratio: *ratio,
                left: left_idx,
                right: right_idx,
            };
        }
        idx
    }
}
