//! Numeric constants that bound layout and persistence behavior.

/// Minimum split ratio for a grid divider. Dividers dragged past this
/// point are clamped rather than rejected.
pub const MIN_RATIO: f64 = 0.15;

/// Maximum split ratio for a grid divider.
pub const MAX_RATIO: f64 = 0.85;

/// Default edge length of a newly added shape overlay, as a fraction of
/// canvas size.
pub const DEFAULT_SHAPE_SIZE: f64 = 0.25;

/// Minimum edge length a shape overlay can be resized to.
pub const MIN_SHAPE_SIZE: f64 = 0.1;

/// Maximum edge length a shape overlay can be resized to.
pub const MAX_SHAPE_SIZE: f64 = 0.8;

/// Quiescence window for debounced persistence, in milliseconds. A new
/// change inside the window restarts it (last-write-wins coalescing).
pub const SAVE_QUIESCENCE_MS: u64 = 1000;

/// Raster multiplier for full-quality PNG export.
pub const EXPORT_MULTIPLIER: f64 = 2.0;

/// Raster multiplier for JPEG thumbnails.
pub const THUMBNAIL_MULTIPLIER: f64 = 0.5;

/// JPEG quality for thumbnails.
pub const THUMBNAIL_QUALITY: f64 = 0.8;
