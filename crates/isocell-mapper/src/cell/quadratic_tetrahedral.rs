//! Quadratic tetrahedral cell.
//!
//! Node order: corners at local `(0,0,0)`, `(1,0,0)`, `(0,0,1)`, `(0,1,0)`, followed by
//! the mid-edge nodes of edges 0-1, 0-2, 0-3, 1-2, 2-3 and 1-3.

use glam::Vec3;
use isocell_core::CellType;

use super::tetrahedral::{fold_into_simplex, simplex_contains};
use super::{CellTopology, DifferentialFunctions, InterpolationFunctions, QuadraturePoint};

const NODES: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.5, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 0.5),
    Vec3::new(0.0, 0.5, 0.0),
    Vec3::new(0.5, 0.0, 0.5),
    Vec3::new(0.0, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.0),
];

// Centroids of the eight sub-tetrahedra of the midpoint subdivision
const QUADRATURE: [QuadraturePoint; 8] = [
    QuadraturePoint::new(0.125, 0.125, 0.125, 1.0 / 48.0),
    QuadraturePoint::new(0.625, 0.125, 0.125, 1.0 / 48.0),
    QuadraturePoint::new(0.125, 0.125, 0.625, 1.0 / 48.0),
    QuadraturePoint::new(0.125, 0.625, 0.125, 1.0 / 48.0),
    QuadraturePoint::new(0.25, 0.125, 0.25, 1.0 / 48.0),
    QuadraturePoint::new(0.375, 0.25, 0.125, 1.0 / 48.0),
    QuadraturePoint::new(0.125, 0.25, 0.375, 1.0 / 48.0),
    QuadraturePoint::new(0.25, 0.375, 0.25, 1.0 / 48.0),
];

/// Ten-node tetrahedron with a complete quadratic basis.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticTetrahedralCell;

impl CellTopology for QuadraticTetrahedralCell {
    fn cell_type(&self) -> CellType {
        CellType::QuadraticTetrahedra
    }

    fn reference_node(&self, index: usize) -> Vec3 {
        NODES[index]
    }

    fn interpolation_functions(&self, local: Vec3) -> InterpolationFunctions {
        let Vec3 { x, y, z } = local;
        let w = 1.0 - x - y - z;
        InterpolationFunctions::from_array([
            2.0 * w * (0.5 - x - y - z),
            2.0 * x * (x - 0.5),
            2.0 * z * (z - 0.5),
            2.0 * y * (y - 0.5),
            4.0 * x * w,
            4.0 * z * w,
            4.0 * y * w,
            4.0 * z * x,
            4.0 * y * z,
            4.0 * x * y,
        ])
    }

    fn differential_functions(&self, local: Vec3) -> DifferentialFunctions {
        let Vec3 { x, y, z } = local;
        let corner = 4.0 * (x + y + z) - 3.0;
        DifferentialFunctions::from_blocks(
            [
                corner,
                4.0 * x - 1.0,
                0.0,
                0.0,
                4.0 * (1.0 - 2.0 * x - y - z),
                -4.0 * z,
                -4.0 * y,
                4.0 * z,
                0.0,
                4.0 * y,
            ],
            [
                corner,
                0.0,
                0.0,
                4.0 * y - 1.0,
                -4.0 * x,
                -4.0 * z,
                4.0 * (1.0 - x - 2.0 * y - z),
                0.0,
                4.0 * z,
                4.0 * x,
            ],
            [
                corner,
                0.0,
                4.0 * z - 1.0,
                0.0,
                -4.0 * x,
                4.0 * (1.0 - x - y - 2.0 * z),
                -4.0 * y,
                4.0 * x,
                4.0 * y,
                0.0,
            ],
        )
    }

    fn fold_uniform(&self, stu: Vec3) -> Vec3 {
        fold_into_simplex(stu)
    }

    fn volume_quadrature(&self) -> &'static [QuadraturePoint] {
        &QUADRATURE
    }

    fn contains_local(&self, local: Vec3, tolerance: f32) -> bool {
        simplex_contains(local, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::quadratic_tetrahedra::{MIDPOINT_OF, SUBCELLS};

    #[test]
    fn test_quadrature_points_are_subcell_centroids() {
        for (q, subcell) in QUADRATURE.iter().zip(SUBCELLS) {
            let centroid = subcell.iter().map(|&i| NODES[i]).sum::<Vec3>() * 0.25;
            assert!(
                (Vec3::from_array(q.local) - centroid).length() < 1e-6,
                "{subcell:?}"
            );
        }
    }

    #[test]
    fn test_midpoint_nodes() {
        for (k, [a, b]) in MIDPOINT_OF.iter().enumerate() {
            assert_eq!(NODES[4 + k], (NODES[*a] + NODES[*b]) * 0.5);
        }
    }

    #[test]
    fn test_curved_edge_volume() {
        // Pulling one mid-edge node outward bulges the cell, so the volume grows
        use isocell_core::UnstructuredVolume;

        let mut nodes = NODES.to_vec();
        nodes[9] += Vec3::new(0.1, 0.1, 0.0);
        let volume = UnstructuredVolume::from_cells(
            CellType::QuadraticTetrahedra,
            &nodes,
            vec![0.0; 10],
            &[[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]],
        )
        .expect("valid volume");
        let mut cell = crate::Cell::new(&volume);
        cell.bind(0).expect("bind failed");
        assert!(cell.volume() > 1.0 / 6.0);
    }
}
