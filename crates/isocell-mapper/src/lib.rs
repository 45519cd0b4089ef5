//! Mappers for isocell-rs.
//!
//! This crate turns volume objects into geometry:
//! - [`Cell`] and the [`CellTopology`] implementors evaluate the finite-element map of one
//!   cell (interpolation, derivatives, Jacobi matrix, sampling, volume)
//! - [`Isosurface`] extracts triangle surfaces from unstructured volumes
//! - [`marching_cubes()`] extracts triangle surfaces from structured grids
//! - [`CellByCellSampling`] generates uniformly distributed particles
//! - [`tables`] holds the per-topology case tables

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors return values that don't need must_use
#![allow(clippy::must_use_candidate)]
// Local coordinates are conventionally named x, y, z and s, t, u
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod cell;
pub mod isosurface;
pub mod marching_cubes;
pub mod sampling;
pub mod tables;

pub use cell::{
    topology_for, Cell, CellTopology, DifferentialFunctions, HexahedralCell,
    InterpolationFunctions, PrismaticCell, PyramidalCell, QuadraticTetrahedralCell,
    QuadraturePoint, TetrahedralCell, MAX_NODES,
};
pub use isosurface::Isosurface;
pub use marching_cubes::marching_cubes;
pub use sampling::CellByCellSampling;
