//! isocell-rs: cell interpolation and isosurface extraction for volume data.
//!
//! isocell evaluates the finite-element map of unstructured volume cells (tetrahedra,
//! quadratic tetrahedra, hexahedra, pyramids and prisms) and builds geometry from it:
//! isosurfaces, marching cubes surfaces of structured grids, and particle sets.
//!
//! # Quick Start
//!
//! ```
//! use isocell::*;
//!
//! fn main() -> Result<()> {
//!     // One tetrahedron with a linear field
//!     let volume = UnstructuredVolume::from_cells(
//!         CellType::Tetrahedra,
//!         &[Vec3::X, Vec3::Y, Vec3::Z, Vec3::ZERO],
//!         vec![0.0, 0.0, 1.0, 1.0],
//!         &[[0, 1, 2, 3]],
//!     )?;
//!
//!     let surface = extract_isosurface(&volume, &IsosurfaceOptions::with_isolevel(0.5))?;
//!     assert_eq!(surface.number_of_triangles(), 2);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Cells
//!
//! A [`Cell`] is bound to one cell of an [`UnstructuredVolume`] at a time. It exposes
//! the interpolation functions, their derivatives, the Jacobi matrix, interpolated
//! values and gradients, random sampling and the cell volume.
//!
//! # Mappers
//!
//! - [`extract_isosurface`] - triangle surface of an unstructured volume
//! - [`marching_cubes`] - triangle surface of a structured grid
//! - [`sample_particles`] - uniformly distributed particles carrying field values

// Re-export core types
pub use isocell_core::{
    error::{IsocellError, Result},
    options::{IsosurfaceOptions, NormalType, SamplingOptions},
    polygon::{PointObject, PolygonObject},
    random::Xorshift128,
    structured::StructuredVolume,
    volume::{CellType, UnstructuredVolume},
    Mat3, UVec3, Vec3,
};

// Re-export mapper types
pub use isocell_mapper::{
    tables, topology_for, Cell, CellByCellSampling, CellTopology, DifferentialFunctions,
    HexahedralCell, InterpolationFunctions, Isosurface, PrismaticCell, PyramidalCell,
    QuadraticTetrahedralCell, QuadraturePoint, TetrahedralCell, MAX_NODES,
};

/// Extracts the isosurface of an unstructured scalar volume.
pub fn extract_isosurface(
    volume: &UnstructuredVolume,
    options: &IsosurfaceOptions,
) -> Result<PolygonObject> {
    Isosurface::new(options.clone()).extract(volume)
}

/// Extracts the `isolevel` surface of a structured grid with marching cubes.
pub fn marching_cubes(volume: &StructuredVolume, isolevel: f32) -> PolygonObject {
    isocell_mapper::marching_cubes(volume, isolevel)
}

/// Fills an unstructured volume with particles, `options.density` per unit volume.
pub fn sample_particles(
    volume: &UnstructuredVolume,
    options: &SamplingOptions,
) -> Result<PointObject> {
    CellByCellSampling::new(options.clone()).sample(volume)
}
