//! Versioned document serialization.
//!
//! A snapshot carries the persistent scene items, the grid visual
//! config, and exactly one layout shape. Three layout shapes exist in
//! the wild: custom grid plus shape overlays, custom grid alone, and the
//! legacy uniform rows/cols grid. All three load; only the first two are
//! written by current sessions.

use chrono::{DateTime, Utc};
use collagekit_core::error::DocumentError;
use serde::{Deserialize, Serialize};

use crate::grid::GridCell;
use crate::overlay::ShapeRegion;
use crate::scene::SceneItem;

/// Current envelope version. Documents without a version field are
/// treated as this version.
pub const DOCUMENT_VERSION: u32 = 1;

/// Visual styling of grid cell borders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridVisualConfig {
    pub color: String,
    pub thickness: f64,
}

impl Default for GridVisualConfig {
    fn default() -> Self {
        Self {
            color: "#e0e0e0".to_string(),
            thickness: 2.0,
        }
    }
}

/// The layout half of a snapshot, one of the three historical shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutDescriptor {
    CustomGridWithShapes {
        cells: Vec<GridCell>,
        shapes: Vec<ShapeRegion>,
    },
    CustomGrid {
        cells: Vec<GridCell>,
    },
    Legacy {
        rows: u32,
        cols: u32,
    },
}

/// A complete persisted document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub version: u32,
    pub objects: Vec<SceneItem>,
    pub grid_config: GridVisualConfig,
    pub layout: LayoutDescriptor,
    /// Capture time, written for display in project lists. Absent in
    /// old documents.
    pub saved_at: DateTime<Utc>,
}

/// Wire envelope. Layout keys are flattened to the top level so old
/// documents with bare `rows`/`cols` parse without migration.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
    objects: Vec<serde_json::Value>,
    #[serde(default)]
    grid_config: GridVisualConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_grid: Option<Vec<GridCell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_shapes: Option<Vec<ShapeRegion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cols: Option<u32>,
}

impl DocumentSnapshot {
    /// Builds a snapshot from live session state. Ephemeral items are
    /// filtered out here, not at the call site.
    pub fn capture(
        items: &[SceneItem],
        layout: LayoutDescriptor,
        grid_config: GridVisualConfig,
    ) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            objects: items
                .iter()
                .filter(|i| !i.is_ephemeral())
                .cloned()
                .collect(),
            grid_config,
            layout,
            saved_at: Utc::now(),
        }
    }

    /// Serializes to the stable JSON envelope.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        let (custom_grid, custom_shapes, rows, cols) = match &self.layout {
            LayoutDescriptor::CustomGridWithShapes { cells, shapes } => {
                (Some(cells.clone()), Some(shapes.clone()), None, None)
            }
            LayoutDescriptor::CustomGrid { cells } => (Some(cells.clone()), None, None, None),
            LayoutDescriptor::Legacy { rows, cols } => (None, None, Some(*rows), Some(*cols)),
        };
        let envelope = Envelope {
            version: Some(self.version),
            saved_at: Some(self.saved_at),
            objects: self
                .objects
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()
                .map_err(|e| DocumentError::Malformed {
                    reason: e.to_string(),
                })?,
            grid_config: self.grid_config.clone(),
            custom_grid,
            custom_shapes,
            rows,
            cols,
        };
        serde_json::to_string(&envelope).map_err(|e| DocumentError::Malformed {
            reason: e.to_string(),
        })
    }

    /// Parses a document, tolerating damage at the item level.
    ///
    /// A malformed envelope is fatal. A malformed individual object is
    /// skipped with a warning so one corrupt item cannot take the whole
    /// project down. An unrecognized layout shape falls back to a single
    /// full-canvas region.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let envelope: Envelope =
            serde_json::from_str(json).map_err(|e| DocumentError::Malformed {
                reason: e.to_string(),
            })?;

        let mut objects = Vec::with_capacity(envelope.objects.len());
        for (index, raw) in envelope.objects.into_iter().enumerate() {
            match serde_json::from_value::<SceneItem>(raw) {
                Ok(item) if item.is_ephemeral() => {
                    tracing::warn!(index, "skipping ephemeral item found in document");
                }
                Ok(item) => objects.push(item),
                Err(error) => {
                    tracing::warn!(index, %error, "skipping unreadable document object");
                }
            }
        }

        let layout = match (
            envelope.custom_grid,
            envelope.custom_shapes,
            envelope.rows,
            envelope.cols,
        ) {
            (Some(cells), Some(shapes), _, _) => {
                LayoutDescriptor::CustomGridWithShapes { cells, shapes }
            }
            (Some(cells), None, _, _) => LayoutDescriptor::CustomGrid { cells },
            (None, _, Some(rows), Some(cols)) if rows > 0 && cols > 0 => {
                LayoutDescriptor::Legacy { rows, cols }
            }
            _ => {
                tracing::warn!("document has no recognizable layout, using one full-canvas cell");
                LayoutDescriptor::Legacy { rows: 1, cols: 1 }
            }
        };

        Ok(Self {
            version: envelope.version.unwrap_or(DOCUMENT_VERSION),
            objects,
            grid_config: envelope.grid_config,
            layout,
            saved_at: envelope.saved_at.unwrap_or_else(Utc::now),
        })
    }
}
