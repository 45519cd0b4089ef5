//! Core types for isocell-rs.
//!
//! This crate provides the data objects exchanged with the mappers in `isocell-mapper`:
//! - [`UnstructuredVolume`] and [`StructuredVolume`] as read-only inputs
//! - [`PolygonObject`] and [`PointObject`] as outputs
//! - [`IsosurfaceOptions`] and [`SamplingOptions`] for configuration
//! - [`Xorshift128`], the default injected random number generator

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors and builders return values that don't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod options;
pub mod polygon;
pub mod random;
pub mod structured;
pub mod volume;

pub use error::{IsocellError, Result};
pub use options::{IsosurfaceOptions, NormalType, SamplingOptions};
pub use polygon::{PointObject, PolygonObject};
pub use random::Xorshift128;
pub use structured::StructuredVolume;
pub use volume::{CellType, UnstructuredVolume};

// Re-export glam types for convenience
pub use glam::{Mat3, UVec3, Vec3};
