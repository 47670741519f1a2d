//! Capture specifications for export and thumbnail generation.
//!
//! The engine does not rasterize; it tells the host renderer what to
//! capture. Ephemeral decorations are listed as hidden so borders and
//! the highlight never appear in exported images.

use uuid::Uuid;

use crate::scene::SceneItem;
use collagekit_core::constants::{EXPORT_MULTIPLIER, THUMBNAIL_MULTIPLIER, THUMBNAIL_QUALITY};

/// Output encoding for a capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageFormat {
    Png,
    Jpeg { quality: f64 },
}

/// A renderer capture request: resolution multiplier, encoding, and the
/// items to hide for the duration of the capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureSpec {
    pub multiplier: f64,
    pub format: ImageFormat,
    pub hidden: Vec<Uuid>,
}

fn ephemeral_ids(items: &[SceneItem]) -> Vec<Uuid> {
    items
        .iter()
        .filter(|i| i.is_ephemeral())
        .map(|i| i.id)
        .collect()
}

/// Full-quality export: PNG at twice the native resolution.
pub fn export_spec(items: &[SceneItem]) -> CaptureSpec {
    CaptureSpec {
        multiplier: EXPORT_MULTIPLIER,
        format: ImageFormat::Png,
        hidden: ephemeral_ids(items),
    }
}

/// Preview thumbnail: half-resolution JPEG.
pub fn thumbnail_spec(items: &[SceneItem]) -> CaptureSpec {
    CaptureSpec {
        multiplier: THUMBNAIL_MULTIPLIER,
        format: ImageFormat::Jpeg {
            quality: THUMBNAIL_QUALITY,
        },
        hidden: ephemeral_ids(items),
    }
}
