//! Typed per-image filter contract.
//!
//! Filters are a closed set of tagged variants matched exhaustively;
//! there is no dispatch by name. Applying a filter is idempotent by
//! kind: parameterized kinds replace any existing entry of the same kind
//! in place, and `Sepia` toggles presence.

use serde::{Deserialize, Serialize};

/// A non-destructive image adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageFilter {
    /// Saturation shift, `amount` in `[-1, 1]`.
    Saturation { amount: f64 },
    /// Contrast shift, `amount` in `[-1, 1]`.
    Contrast { amount: f64 },
    /// Hue rotation as a fraction of a full rotation, in `[-1, 1]`.
    HueRotation { rotation: f64 },
    /// Pixelation with the given block size in pixels.
    Pixelate { block_size: u32 },
    /// Sepia tone. Presence-only; applying toggles.
    Sepia,
}

/// Discriminant of an [`ImageFilter`], used for replace/remove by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Saturation,
    Contrast,
    HueRotation,
    Pixelate,
    Sepia,
}

impl ImageFilter {
    pub fn kind(&self) -> FilterKind {
        match self {
            ImageFilter::Saturation { .. } => FilterKind::Saturation,
            ImageFilter::Contrast { .. } => FilterKind::Contrast,
            ImageFilter::HueRotation { .. } => FilterKind::HueRotation,
            ImageFilter::Pixelate { .. } => FilterKind::Pixelate,
            ImageFilter::Sepia => FilterKind::Sepia,
        }
    }

    /// Clamps parameters into their accepted ranges. Pixelate block
    /// sizes at or below 1 are floored to a no-op block rather than
    /// rejected.
    fn normalized(self) -> Self {
        match self {
            ImageFilter::Saturation { amount } => ImageFilter::Saturation {
                amount: amount.clamp(-1.0, 1.0),
            },
            ImageFilter::Contrast { amount } => ImageFilter::Contrast {
                amount: amount.clamp(-1.0, 1.0),
            },
            ImageFilter::HueRotation { rotation } => ImageFilter::HueRotation {
                rotation: rotation.clamp(-1.0, 1.0),
            },
            ImageFilter::Pixelate { block_size } => ImageFilter::Pixelate {
                block_size: block_size.max(1),
            },
            ImageFilter::Sepia => ImageFilter::Sepia,
        }
    }
}

/// The ordered filter list carried by an image scene item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterStack {
    entries: Vec<ImageFilter>,
}

impl FilterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ImageFilter] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, kind: FilterKind) -> Option<&ImageFilter> {
        self.entries.iter().find(|f| f.kind() == kind)
    }

    /// Applies a filter. Parameterized kinds replace the existing entry
    /// of that kind at its current position; `Sepia` toggles.
    pub fn apply(&mut self, filter: ImageFilter) {
        let filter = filter.normalized();
        let existing = self.entries.iter().position(|f| f.kind() == filter.kind());
        match (filter, existing) {
            (ImageFilter::Sepia, Some(i)) => {
                self.entries.remove(i);
            }
            (f, Some(i)) => self.entries[i] = f,
            (f, None) => self.entries.push(f),
        }
    }

    /// Removes the entry of the given kind, if present.
    pub fn remove(&mut self, kind: FilterKind) {
        self.entries.retain(|f| f.kind() != kind);
    }
}
