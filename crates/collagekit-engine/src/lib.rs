//! # CollageKit Engine
//!
//! This crate provides the layered composition engine behind the
//! collage editor: everything that decides *where* content may go and
//! how layered regions interact. Raster compositing itself is delegated
//! to the host's 2D scene graph; this engine owns layout, addressing,
//! clipping, stacking, and the document format.
//!
//! ## Core Components
//!
//! ### Layout
//! - **Grid tree**: binary space-partition tree turning split/resize
//!   gestures into a flat, normalized cell list
//! - **Shape overlays**: freely placed non-rectangular regions layered
//!   above the grid
//! - **Resolver**: addresses → pixel bounds, pointer/drop coordinates →
//!   addresses
//! - **Viewport**: display-pixel ↔ canvas-pixel mapping for drag & drop
//!
//! ### Content
//! - **Scene items**: placed images and text with their transforms
//! - **Clip geometry**: region outlines (rect, circle, heart, star,
//!   hexagon) constraining imagery to its region
//! - **Stacking**: the deterministic back-to-front order across content
//!   categories
//! - **Filters**: the typed per-image adjustment contract
//!
//! ### Persistence
//! - **Document**: versioned JSON snapshots tolerating legacy layout
//!   shapes
//! - **Session**: the single owner of editor state, with debounced
//!   snapshot scheduling and the external service seams
//!
//! ## Architecture
//!
//! ```text
//! EditorSession (owns all state)
//!   ├── GridTree ──flatten──▶ Vec<GridCell>
//!   ├── ShapeOverlayStore ──▶ Vec<ShapeRegion>
//!   ├── Layout (cells + shapes + legacy grid) ◀── resolver
//!   ├── Vec<SceneItem> ◀── stacking enforcer
//!   └── SaveScheduler ──▶ ProjectStore / AssetHost
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use collagekit_engine::EditorSession;
//!
//! let mut session = EditorSession::new(1080.0, 1080.0);
//! session.split_region(root_cell, SplitDirection::Horizontal);
//! session.add_image_to_address("https://…/photo.jpg", 1600.0, 900.0, 0);
//! let snapshot = session.snapshot();
//! ```

pub mod clip;
pub mod document;
pub mod filters;
pub mod grid;
pub mod overlay;
pub mod resolver;
pub mod scene;
pub mod session;
pub mod stacking;
pub mod viewport;

pub use clip::ClipShape;
pub use document::{DocumentSnapshot, GridVisualConfig, LayoutDescriptor};
pub use filters::{FilterKind, FilterStack, ImageFilter};
pub use grid::{GridCell, GridTree, SplitDirection};
pub use overlay::{ShapeKind, ShapeOverlayStore, ShapeRegion};
pub use resolver::{Layout, RegionBounds};
pub use scene::{ItemKind, ItemTransform, SceneItem};
pub use session::export::{CaptureSpec, ImageFormat};
pub use session::persistence::{
    AssetHost, ProjectPatch, ProjectStore, SaveScheduler, UploadedAsset,
};
pub use session::EditorSession;
pub use viewport::DisplayViewport;
