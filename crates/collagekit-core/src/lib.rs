//! # CollageKit Core
//!
//! Core types, errors, and geometry primitives for CollageKit.
//! Provides the fundamental abstractions shared by the composition
//! engine: fractional canvas geometry, error taxonomies, and the
//! numeric constants that bound layout operations.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{DocumentError, Error, Result, ServiceError};
pub use geometry::{FracRect, Point};
