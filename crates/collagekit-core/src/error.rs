//! Error handling for CollageKit
//!
//! Provides error types for the two failure surfaces of the engine:
//! - Document errors (malformed or legacy snapshots)
//! - Service errors (upstream persistence / asset hosting)
//!
//! Invalid structural operations (splitting a non-leaf, moving an
//! unknown shape) are deliberately *not* errors: they arise from stale
//! UI references and are handled as silent no-ops at the call site.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Document error type
///
/// Represents errors encountered while serializing or deserializing a
/// document snapshot. Most load-time problems degrade gracefully
/// (warn-and-skip); these variants cover the cases that cannot.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    /// The snapshot was not valid JSON at all
    #[error("Malformed document: {reason}")]
    Malformed {
        /// Parser message describing what failed.
        reason: String,
    },

    /// A required field was missing from the snapshot
    #[error("Missing field '{field}' in document")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A scene item carried an unknown content type
    #[error("Unknown scene item type: {item_type}")]
    UnknownItemType {
        /// The unrecognized type tag.
        item_type: String,
    },
}

/// Service error type
///
/// Represents failures from external collaborators (persistence store,
/// asset host). The engine surfaces these to the caller and never
/// retries; retry policy belongs to the UI layer.
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    /// Asset upload failed
    #[error("Upload failed: {message}")]
    UploadFailed {
        /// The upstream failure message.
        message: String,
    },

    /// Project record could not be created or updated
    #[error("Persistence failed: {message}")]
    PersistenceFailed {
        /// The upstream failure message.
        message: String,
    },

    /// The referenced project does not exist
    #[error("Project not found: {id}")]
    ProjectNotFound {
        /// The project identifier that was looked up.
        id: String,
    },
}

/// Top-level error type combining all error categories
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Service error
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Result type alias using the top-level error
pub type Result<T> = std::result::Result<T, Error>;
