//! Stacking order enforcement.
//!
//! Scene items are kept in a fixed layer order regardless of insertion
//! or mutation order: images at the bottom, then borders, then text,
//! then the active-region highlight. Within a layer, relative order is
//! preserved, so "bring to front" means moving an item to the end of
//! its own layer, not above text.

use crate::scene::{ItemKind, SceneItem};

/// Layer rank, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Images = 0,
    Borders = 1,
    Text = 2,
    Highlight = 3,
}

impl Layer {
    pub fn of(item: &SceneItem) -> Self {
        match item.kind {
            ItemKind::Image { .. } => Layer::Images,
            ItemKind::GridBorder { .. } | ItemKind::ShapeBorder { .. } => Layer::Borders,
            ItemKind::Text { .. } => Layer::Text,
            ItemKind::Highlight { .. } => Layer::Highlight,
        }
    }
}

/// Sorts `items` into layer order. Stable: relative order within a
/// layer is untouched.
pub fn enforce(items: &mut Vec<SceneItem>) {
    items.sort_by_key(Layer::of);
}

/// Moves the item with `id` to the top of its own layer.
pub fn bring_to_front(items: &mut Vec<SceneItem>, id: uuid::Uuid) {
    let Some(pos) = items.iter().position(|i| i.id == id) else {
        return;
    };
    let item = items.remove(pos);
    items.push(item);
    enforce(items);
}
