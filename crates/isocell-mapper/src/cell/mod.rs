//! Finite-element style cells over an unstructured volume.
//!
//! # Overview
//!
//! A [`Cell`] binds one cell of an [`UnstructuredVolume`] at a time and exposes the
//! reference-to-physical map of that cell: interpolation functions `N(ξ)`, their
//! derivatives `∂N/∂ξ`, the Jacobi matrix, interpolated field values and gradients,
//! random sampling, and the cell volume.
//!
//! The per-topology basis lives behind the [`CellTopology`] trait, with one zero-sized
//! implementor per [`CellType`]. Basis evaluations are returned by value
//! ([`InterpolationFunctions`], [`DifferentialFunctions`]) rather than written into a
//! shared buffer, so a topology can be used from any number of threads. A `Cell` itself
//! carries the bound node data and the current local point and is meant to be owned by a
//! single worker; parallel sweeps give every worker its own `Cell` over the same volume.
//!
//! # Example
//!
//! ```rust
//! use glam::Vec3;
//! use isocell_core::{CellType, UnstructuredVolume};
//! use isocell_mapper::Cell;
//!
//! let volume = UnstructuredVolume::from_cells(
//!     CellType::Tetrahedra,
//!     &[Vec3::X, Vec3::Y, Vec3::Z, Vec3::ZERO],
//!     vec![1.0, 2.0, 3.0, 0.0],
//!     &[[0, 1, 2, 3]],
//! )?;
//! let mut cell = Cell::new(&volume);
//! cell.bind(0)?;
//! assert!((cell.volume() - 1.0 / 6.0).abs() < 1e-6);
//! # Ok::<(), isocell_core::IsocellError>(())
//! ```

mod hexahedral;
mod prismatic;
mod pyramidal;
mod quadratic_tetrahedral;
mod tetrahedral;

pub use hexahedral::HexahedralCell;
pub use prismatic::PrismaticCell;
pub use pyramidal::PyramidalCell;
pub use quadratic_tetrahedral::QuadraticTetrahedralCell;
pub use tetrahedral::TetrahedralCell;

use glam::{Mat3, Vec3};
use isocell_core::{CellType, IsocellError, Result, UnstructuredVolume};
use rand::{Rng, RngCore};

/// Largest node count among the supported cell types.
pub const MAX_NODES: usize = 10;

/// Newton iterations used by [`Cell::transform_global_to_local`].
const MAX_NEWTON_ITERATIONS: usize = 20;

/// Convergence threshold on the local-coordinate update.
const NEWTON_TOLERANCE: f32 = 1e-6;

/// Interpolation function values `N_i(ξ)` at one local point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationFunctions {
    values: [f32; MAX_NODES],
    len: usize,
}

impl InterpolationFunctions {
    /// Wraps the values of an `N`-node basis.
    pub fn from_array<const N: usize>(n: [f32; N]) -> Self {
        let mut values = [0.0; MAX_NODES];
        values[..N].copy_from_slice(&n);
        Self { values, len: N }
    }

    /// Returns `N_0 .. N_{n-1}`.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values[..self.len]
    }

    /// Returns `Σ N_i · w_i`.
    #[inline]
    pub fn interpolate(&self, weights: &[f32]) -> f32 {
        self.as_slice().iter().zip(weights).map(|(n, w)| n * w).sum()
    }

    /// Returns `Σ N_i · p_i`.
    #[inline]
    pub fn interpolate_points(&self, points: &[Vec3]) -> Vec3 {
        self.as_slice()
            .iter()
            .zip(points)
            .map(|(&n, &p)| n * p)
            .sum()
    }
}

/// Derivatives `∂N_i/∂ξ` at one local point.
///
/// Stored as three contiguous blocks of `n` values: `∂/∂x`, then `∂/∂y`, then `∂/∂z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentialFunctions {
    values: [f32; 3 * MAX_NODES],
    len: usize,
}

impl DifferentialFunctions {
    /// Wraps the three derivative blocks of an `N`-node basis.
    pub fn from_blocks<const N: usize>(dx: [f32; N], dy: [f32; N], dz: [f32; N]) -> Self {
        let mut values = [0.0; 3 * MAX_NODES];
        values[..N].copy_from_slice(&dx);
        values[N..2 * N].copy_from_slice(&dy);
        values[2 * N..3 * N].copy_from_slice(&dz);
        Self { values, len: N }
    }

    /// Returns all `3 n` values.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values[..3 * self.len]
    }

    /// Returns the block of derivatives along local `axis` (0, 1 or 2).
    #[inline]
    pub fn axis(&self, axis: usize) -> &[f32] {
        &self.values[axis * self.len..(axis + 1) * self.len]
    }

    /// Returns `Σ ∂N_i/∂ξ · w_i` for each local axis.
    #[inline]
    pub fn interpolate(&self, weights: &[f32]) -> Vec3 {
        Vec3::from_array(std::array::from_fn(|a| {
            self.axis(a).iter().zip(weights).map(|(d, w)| d * w).sum()
        }))
    }

    /// Returns the Jacobi matrix for the given node positions.
    ///
    /// Row `a` is `Σ_i ∂N_i/∂ξ_a · p_i`, i.e. the derivative of the physical position
    /// along local axis `a`.
    #[inline]
    pub fn jacobi_matrix(&self, points: &[Vec3]) -> Mat3 {
        let rows: [Vec3; 3] = std::array::from_fn(|a| {
            self.axis(a)
                .iter()
                .zip(points)
                .map(|(&d, &p)| d * p)
                .sum()
        });
        Mat3::from_cols(rows[0], rows[1], rows[2]).transpose()
    }
}

/// A weighted sample point of a volume rule, in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraturePoint {
    /// Local coordinates of the sample.
    pub local: [f32; 3],
    /// Weight, in units of reference volume.
    pub weight: f32,
}

impl QuadraturePoint {
    /// Creates a sample point.
    pub const fn new(x: f32, y: f32, z: f32, weight: f32) -> Self {
        Self {
            local: [x, y, z],
            weight,
        }
    }
}

/// Shape functions and reference geometry of one cell type.
pub trait CellTopology: Send + Sync {
    /// Returns the cell type this topology implements.
    fn cell_type(&self) -> CellType;

    /// Returns the number of nodes.
    fn number_of_nodes(&self) -> usize {
        self.cell_type().num_nodes()
    }

    /// Returns the local coordinates of node `index`.
    fn reference_node(&self, index: usize) -> Vec3;

    /// Evaluates the interpolation functions at `local`.
    ///
    /// Points outside the reference cell are extrapolated without any check.
    fn interpolation_functions(&self, local: Vec3) -> InterpolationFunctions;

    /// Evaluates the derivatives of the interpolation functions at `local`.
    fn differential_functions(&self, local: Vec3) -> DifferentialFunctions;

    /// Folds a point of the unit cube into the reference cell, preserving uniformity.
    fn fold_uniform(&self, stu: Vec3) -> Vec3;

    /// Draws a uniformly distributed local point.
    fn sample_local(&self, rng: &mut dyn RngCore) -> Vec3 {
        let s: f32 = rng.gen();
        let t: f32 = rng.gen();
        let u: f32 = rng.gen();
        self.fold_uniform(Vec3::new(s, t, u))
    }

    /// Returns the sample points used by [`Cell::volume`].
    fn volume_quadrature(&self) -> &'static [QuadraturePoint];

    /// Returns true if `local` lies in the reference cell, up to `tolerance`.
    fn contains_local(&self, local: Vec3, tolerance: f32) -> bool;

    /// Returns the local end points of the straight edge between nodes `a` and `b`.
    fn edge_local_points(&self, a: usize, b: usize) -> (Vec3, Vec3) {
        (self.reference_node(a), self.reference_node(b))
    }

    /// Returns the local centroid of the reference nodes.
    fn centroid(&self) -> Vec3 {
        let n = self.number_of_nodes();
        #[allow(clippy::cast_precision_loss)]
        let scale = 1.0 / n as f32;
        (0..n).map(|i| self.reference_node(i)).sum::<Vec3>() * scale
    }
}

/// Returns the topology implementing `cell_type`.
pub fn topology_for(cell_type: CellType) -> &'static dyn CellTopology {
    match cell_type {
        CellType::Tetrahedra => &TetrahedralCell,
        CellType::QuadraticTetrahedra => &QuadraticTetrahedralCell,
        CellType::Hexahedra => &HexahedralCell,
        CellType::Pyramid => &PyramidalCell,
        CellType::Prism => &PrismaticCell,
    }
}

/// One cell of an unstructured volume, rebound as a sweep advances.
#[derive(Debug, Clone)]
pub struct Cell<'a> {
    volume: &'a UnstructuredVolume,
    topology: &'static dyn CellTopology,
    index: Option<usize>,
    node_indices: [u32; MAX_NODES],
    coords: [Vec3; MAX_NODES],
    // veclen values per node, node-major
    values: Vec<f32>,
    local_point: Vec3,
    global_point: Vec3,
}

impl std::fmt::Debug for dyn CellTopology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CellTopology")
            .field(&self.cell_type())
            .finish()
    }
}

impl<'a> Cell<'a> {
    /// Creates an unbound cell over `volume`, using the volume's cell type.
    pub fn new(volume: &'a UnstructuredVolume) -> Self {
        let topology = topology_for(volume.cell_type());
        Self {
            volume,
            topology,
            index: None,
            node_indices: [0; MAX_NODES],
            coords: [Vec3::ZERO; MAX_NODES],
            values: vec![0.0; volume.veclen() * topology.number_of_nodes()],
            local_point: Vec3::ZERO,
            global_point: Vec3::ZERO,
        }
    }

    /// Loads the nodes of cell `index`.
    pub fn bind(&mut self, index: usize) -> Result<()> {
        let count = self.volume.number_of_cells();
        if index >= count {
            return Err(IsocellError::InvalidCellIndex { index, count });
        }
        let veclen = self.volume.veclen();
        let connection = self.volume.cell_connection(index);
        for (k, &node) in connection.iter().enumerate() {
            self.node_indices[k] = node;
            self.coords[k] = self.volume.coord(node as usize);
            self.values[k * veclen..(k + 1) * veclen]
                .copy_from_slice(self.volume.node_value(node as usize));
        }
        self.index = Some(index);
        Ok(())
    }

    /// Returns the bound cell index.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the topology of the cell.
    pub fn topology(&self) -> &'static dyn CellTopology {
        self.topology
    }

    /// Returns the volume the cell reads from.
    pub fn volume_object(&self) -> &'a UnstructuredVolume {
        self.volume
    }

    /// Returns the number of nodes of the cell.
    #[inline]
    pub fn number_of_nodes(&self) -> usize {
        self.topology.number_of_nodes()
    }

    /// Returns the global node indices of the bound cell.
    #[inline]
    pub fn node_indices(&self) -> &[u32] {
        &self.node_indices[..self.number_of_nodes()]
    }

    /// Returns the physical node positions of the bound cell.
    #[inline]
    pub fn coords(&self) -> &[Vec3] {
        &self.coords[..self.number_of_nodes()]
    }

    /// Returns the node values of the bound cell, `veclen` per node.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the first field component of node `k`.
    #[inline]
    pub fn node_scalar(&self, k: usize) -> f32 {
        self.values[k * self.volume.veclen()]
    }

    /// Returns the first field component of every node.
    pub fn scalars(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().step_by(self.volume.veclen()).copied()
    }

    fn nodal_scalars(&self) -> [f32; MAX_NODES] {
        let mut scalars = [0.0; MAX_NODES];
        for (dst, v) in scalars.iter_mut().zip(self.scalars()) {
            *dst = v;
        }
        scalars
    }

    /// Returns the current local point.
    pub fn local_point(&self) -> Vec3 {
        self.local_point
    }

    /// Returns the physical point of the last [`random_sampling`](Self::random_sampling).
    pub fn global_point(&self) -> Vec3 {
        self.global_point
    }

    /// Moves the current local point. Nothing is recomputed.
    pub fn set_local_point(&mut self, local: Vec3) {
        self.local_point = local;
    }

    /// Evaluates the interpolation functions at `local`.
    #[inline]
    pub fn interpolation_functions(&self, local: Vec3) -> InterpolationFunctions {
        self.topology.interpolation_functions(local)
    }

    /// Evaluates the differential functions at `local`.
    #[inline]
    pub fn differential_functions(&self, local: Vec3) -> DifferentialFunctions {
        self.topology.differential_functions(local)
    }

    /// Maps a local point to physical space.
    #[inline]
    pub fn transform_local_to_global(&self, local: Vec3) -> Vec3 {
        self.interpolation_functions(local)
            .interpolate_points(self.coords())
    }

    /// Returns the Jacobi matrix at `local`.
    #[inline]
    pub fn jacobi_matrix_at(&self, local: Vec3) -> Mat3 {
        self.differential_functions(local)
            .jacobi_matrix(self.coords())
    }

    /// Returns the Jacobi matrix at the current local point.
    pub fn jacobi_matrix(&self) -> Mat3 {
        self.jacobi_matrix_at(self.local_point)
    }

    /// Draws a random point inside the cell and returns its physical position.
    ///
    /// The point is uniform in local coordinates; Monte-Carlo integrals over the
    /// physical cell must weight samples by `|det J|`.
    pub fn random_sampling(&mut self, rng: &mut dyn RngCore) -> Vec3 {
        let local = self.topology.sample_local(rng);
        self.local_point = local;
        self.global_point = self.transform_local_to_global(local);
        self.global_point
    }

    /// Approximates the physical volume by a fixed sample-point rule on `|det J|`.
    ///
    /// The rule is exact for affine cells and an approximation for curved ones.
    pub fn volume(&self) -> f32 {
        self.topology
            .volume_quadrature()
            .iter()
            .map(|q| {
                q.weight
                    * self
                        .jacobi_matrix_at(Vec3::from_array(q.local))
                        .determinant()
                        .abs()
            })
            .sum()
    }

    /// Interpolates the first field component at `local`.
    pub fn scalar_at(&self, local: Vec3) -> f32 {
        self.interpolation_functions(local)
            .interpolate(&self.nodal_scalars()[..self.number_of_nodes()])
    }

    /// Interpolates the first field component at the current local point.
    pub fn scalar(&self) -> f32 {
        self.scalar_at(self.local_point)
    }

    /// Returns the physical gradient of the first field component at `local`.
    ///
    /// Returns zero where the Jacobi matrix is singular.
    pub fn gradient_at(&self, local: Vec3) -> Vec3 {
        let dn = self.differential_functions(local);
        let j = dn.jacobi_matrix(self.coords());
        let det = j.determinant();
        if det == 0.0 || !det.is_finite() {
            return Vec3::ZERO;
        }
        let local_gradient = dn.interpolate(&self.nodal_scalars()[..self.number_of_nodes()]);
        j.inverse() * local_gradient
    }

    /// Returns the physical gradient at the current local point.
    pub fn gradient(&self) -> Vec3 {
        self.gradient_at(self.local_point)
    }

    /// Finds the local coordinates of a physical point by Newton iteration.
    ///
    /// Starts from the reference centroid. For points outside the cell the result is
    /// the extrapolated preimage, or the last iterate if the iteration does not settle.
    pub fn transform_global_to_local(&self, global: Vec3) -> Vec3 {
        let mut local = self.topology.centroid();
        for _ in 0..MAX_NEWTON_ITERATIONS {
            let residual = global - self.transform_local_to_global(local);
            // Columns of the derivative are the Jacobi rows
            let derivative = self.jacobi_matrix_at(local).transpose();
            let det = derivative.determinant();
            if det == 0.0 || !det.is_finite() {
                break;
            }
            let step = derivative.inverse() * residual;
            local += step;
            if step.length() < NEWTON_TOLERANCE {
                break;
            }
        }
        local
    }

    /// Returns true if the physical point lies inside the bound cell.
    pub fn contains(&self, global: Vec3) -> bool {
        const TOLERANCE: f32 = 1e-4;
        let local = self.transform_global_to_local(global);
        if !self.topology.contains_local(local, TOLERANCE) {
            return false;
        }
        let (lo, hi) = self
            .coords()
            .iter()
            .fold((Vec3::INFINITY, Vec3::NEG_INFINITY), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            });
        let scale = (hi - lo).length().max(f32::MIN_POSITIVE);
        (self.transform_local_to_global(local) - global).length() <= TOLERANCE * scale
    }
}
