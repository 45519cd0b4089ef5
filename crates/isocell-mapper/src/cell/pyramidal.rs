//! Pyramid cell.
//!
//! The reference pyramid is the unit cube collapsed onto the apex: node 0 sits at
//! `(0.5, 0.5, 1)` and the base nodes 1-4 run counter-clockwise around `z = 0`. Local
//! `x` and `y` lose their meaning at `z = 1`, where the Jacobi matrix is singular.

use glam::Vec3;
use isocell_core::CellType;

use super::{CellTopology, DifferentialFunctions, InterpolationFunctions, QuadraturePoint};

const APEX: Vec3 = Vec3::new(0.5, 0.5, 1.0);

const NODES: [Vec3; 5] = [
    APEX,
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
];

// 2-point Gauss abscissae on [0, 1]
const G0: f32 = 0.211_324_87;
const G1: f32 = 0.788_675_1;

const QUADRATURE: [QuadraturePoint; 8] = [
    QuadraturePoint::new(G0, G0, G0, 0.125),
    QuadraturePoint::new(G1, G0, G0, 0.125),
    QuadraturePoint::new(G1, G1, G0, 0.125),
    QuadraturePoint::new(G0, G1, G0, 0.125),
    QuadraturePoint::new(G0, G0, G1, 0.125),
    QuadraturePoint::new(G1, G0, G1, 0.125),
    QuadraturePoint::new(G1, G1, G1, 0.125),
    QuadraturePoint::new(G0, G1, G1, 0.125),
];

/// Five-node pyramid; the base carries a bilinear basis scaled by `1 - z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PyramidalCell;

impl CellTopology for PyramidalCell {
    fn cell_type(&self) -> CellType {
        CellType::Pyramid
    }

    fn reference_node(&self, index: usize) -> Vec3 {
        NODES[index]
    }

    fn interpolation_functions(&self, local: Vec3) -> InterpolationFunctions {
        let Vec3 { x, y, z } = local;
        let (xi, yi, zi) = (1.0 - x, 1.0 - y, 1.0 - z);
        InterpolationFunctions::from_array([
            z,
            xi * yi * zi,
            x * yi * zi,
            x * y * zi,
            xi * y * zi,
        ])
    }

    fn differential_functions(&self, local: Vec3) -> DifferentialFunctions {
        let Vec3 { x, y, z } = local;
        let (xi, yi, zi) = (1.0 - x, 1.0 - y, 1.0 - z);
        DifferentialFunctions::from_blocks(
            [0.0, -yi * zi, yi * zi, y * zi, -y * zi],
            [0.0, -xi * zi, -x * zi, x * zi, xi * zi],
            [1.0, -xi * yi, -x * yi, -x * y, -xi * y],
        )
    }

    fn fold_uniform(&self, stu: Vec3) -> Vec3 {
        stu
    }

    fn volume_quadrature(&self) -> &'static [QuadraturePoint] {
        &QUADRATURE
    }

    fn contains_local(&self, local: Vec3, tolerance: f32) -> bool {
        local.min_element() >= -tolerance && local.max_element() <= 1.0 + tolerance
    }

    fn edge_local_points(&self, a: usize, b: usize) -> (Vec3, Vec3) {
        // An apex edge is the segment x, y = const of the collapsed cube
        let lift = |base: Vec3| Vec3::new(base.x, base.y, 1.0);
        match (a, b) {
            (0, b) => (lift(NODES[b]), NODES[b]),
            (a, 0) => (NODES[a], lift(NODES[a])),
            (a, b) => (NODES[a], NODES[b]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_top_is_the_apex() {
        let n = PyramidalCell.interpolation_functions(Vec3::new(0.2, 0.9, 1.0));
        assert_eq!(n.as_slice(), &[1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_apex_edges_map_linearly() {
        for b in 1..5 {
            let (p, q) = PyramidalCell.edge_local_points(0, b);
            for t in [0.0, 0.25, 0.5, 1.0] {
                let n = PyramidalCell.interpolation_functions(p.lerp(q, t));
                // Only the two edge nodes carry weight, in proportion to t
                assert!((n.as_slice()[0] - (1.0 - t)).abs() < 1e-6);
                assert!((n.as_slice()[b] - t).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_base_edges_use_reference_nodes() {
        assert_eq!(
            PyramidalCell.edge_local_points(2, 3),
            (NODES[2], NODES[3])
        );
    }
}
