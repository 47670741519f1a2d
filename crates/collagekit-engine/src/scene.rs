//! Scene items: the content placed on the canvas.
//!
//! Two persistent kinds (images and text) plus the ephemeral decorations
//! the session regenerates from layout state on every structural change.
//! Ephemeral items are never serialized; storing them alongside the
//! layout they are derived from caused duplication and drift in older
//! document formats.

use collagekit_core::FracRect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clip::ClipShape;
use crate::filters::FilterStack;
use crate::overlay::ShapeKind;

/// Position, scale, and rotation of a placed item. `left`/`top` are the
/// item's center in canvas pixels (center origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTransform {
    pub left: f64,
    pub top: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub angle: f64,
}

impl ItemTransform {
    pub fn at(left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale_x = scale;
        self.scale_y = scale;
        self
    }
}

/// Content carried by a scene item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemKind {
    /// A placed image, with its baked clip and filter list.
    #[serde(rename_all = "camelCase")]
    Image {
        src: String,
        #[serde(default)]
        filters: FilterStack,
        #[serde(default)]
        clip: Option<ClipShape>,
    },
    /// A text layer. Never clipped, so it can float across cells.
    #[serde(rename_all = "camelCase")]
    Text {
        content: String,
        font_size: f64,
        fill: String,
    },
    /// Decorative border of one grid cell. Ephemeral.
    GridBorder { region: FracRect },
    /// Decorative outline of one shape overlay. Ephemeral.
    ShapeBorder { kind: ShapeKind, region: FracRect },
    /// The single active-region highlight. Ephemeral.
    Highlight { region: FracRect },
}

/// An item on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(flatten)]
    pub kind: ItemKind,
    pub transform: ItemTransform,
}

impl SceneItem {
    pub fn image(src: impl Into<String>, transform: ItemTransform, clip: Option<ClipShape>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ItemKind::Image {
                src: src.into(),
                filters: FilterStack::new(),
                clip,
            },
            transform,
        }
    }

    pub fn text(content: impl Into<String>, transform: ItemTransform) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ItemKind::Text {
                content: content.into(),
                font_size: 40.0,
                fill: "#333333".to_string(),
            },
            transform,
        }
    }

    pub fn grid_border(region: FracRect) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ItemKind::GridBorder { region },
            transform: ItemTransform::at(0.0, 0.0),
        }
    }

    pub fn shape_border(kind: ShapeKind, region: FracRect) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ItemKind::ShapeBorder { kind, region },
            transform: ItemTransform::at(0.0, 0.0),
        }
    }

    pub fn highlight(region: FracRect) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ItemKind::Highlight { region },
            transform: ItemTransform::at(0.0, 0.0),
        }
    }

    /// Ephemeral items are regenerated from layout + visual config and
    /// excluded from document snapshots.
    pub fn is_ephemeral(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::GridBorder { .. } | ItemKind::ShapeBorder { .. } | ItemKind::Highlight { .. }
        )
    }

    /// Mutable access to an image item's filters. `None` for other
    /// kinds.
    pub fn filters_mut(&mut self) -> Option<&mut FilterStack> {
        match &mut self.kind {
            ItemKind::Image { filters, .. } => Some(filters),
            _ => None,
        }
    }

    pub fn filters(&self) -> Option<&FilterStack> {
        match &self.kind {
            ItemKind::Image { filters, .. } => Some(filters),
            _ => None,
        }
    }
}
