//! Save debouncing and the external service boundary.
//!
//! The scheduler is a plain deadline handle polled by the host loop:
//! no timers, no threads. Every mutation restarts the deadline, so a
//! burst of edits produces one save after the canvas goes quiet.
//! Service traits keep the engine free of any transport: hosts implement
//! them over whatever backend stores projects and image assets.

use std::time::{Duration, Instant};

use collagekit_core::constants::SAVE_QUIESCENCE_MS;
use collagekit_core::error::ServiceError;

use crate::document::DocumentSnapshot;

/// Debounce handle for autosave. Last write wins: each `touch` pushes
/// the deadline out by the full quiescence window.
#[derive(Debug, Clone)]
pub struct SaveScheduler {
    deadline: Option<Instant>,
    quiescence: Duration,
}

impl SaveScheduler {
    pub fn new() -> Self {
        Self::with_quiescence(Duration::from_millis(SAVE_QUIESCENCE_MS))
    }

    pub fn with_quiescence(quiescence: Duration) -> Self {
        Self {
            deadline: None,
            quiescence,
        }
    }

    /// Restarts the quiescence window from `now`.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiescence);
    }

    /// Drops any pending deadline. Used on teardown so a half-edited
    /// document is never persisted.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once per quiescent window, when the
    /// deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SaveScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an image upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAsset {
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub asset_id: String,
}

/// Partial update applied to a stored project. `None` fields are left
/// untouched by the store.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub snapshot: Option<DocumentSnapshot>,
    pub thumbnail_url: Option<String>,
}

impl ProjectPatch {
    pub fn snapshot(snapshot: DocumentSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            ..Self::default()
        }
    }
}

/// Backend storing project documents.
pub trait ProjectStore {
    /// Creates a project and returns its id.
    fn create_project(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        snapshot: &DocumentSnapshot,
    ) -> Result<String, ServiceError>;

    fn update_project(&mut self, id: &str, patch: ProjectPatch) -> Result<(), ServiceError>;
}

/// Backend storing uploaded image assets.
pub trait AssetHost {
    fn upload_image(
        &mut self,
        data: &[u8],
        filename: &str,
        folder: &str,
    ) -> Result<UploadedAsset, ServiceError>;
}
