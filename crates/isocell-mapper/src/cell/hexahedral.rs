use glam::Vec3;
use isocell_core::CellType;

use super::{CellTopology, DifferentialFunctions, InterpolationFunctions, QuadraturePoint};

const NODES: [Vec3; 8] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(0.0, 1.0, 1.0),
];

// Centers of the eight half-size sub-cubes
const QUADRATURE: [QuadraturePoint; 8] = [
    QuadraturePoint::new(0.25, 0.25, 0.25, 0.125),
    QuadraturePoint::new(0.75, 0.25, 0.25, 0.125),
    QuadraturePoint::new(0.75, 0.75, 0.25, 0.125),
    QuadraturePoint::new(0.25, 0.75, 0.25, 0.125),
    QuadraturePoint::new(0.25, 0.25, 0.75, 0.125),
    QuadraturePoint::new(0.75, 0.25, 0.75, 0.125),
    QuadraturePoint::new(0.75, 0.75, 0.75, 0.125),
    QuadraturePoint::new(0.25, 0.75, 0.75, 0.125),
];

/// Eight-node hexahedron with a trilinear basis on the unit cube.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexahedralCell;

impl CellTopology for HexahedralCell {
    fn cell_type(&self) -> CellType {
        CellType::Hexahedra
    }

    fn reference_node(&self, index: usize) -> Vec3 {
        NODES[index]
    }

    fn interpolation_functions(&self, local: Vec3) -> InterpolationFunctions {
        let Vec3 { x, y, z } = local;
        let (xi, yi, zi) = (1.0 - x, 1.0 - y, 1.0 - z);
        InterpolationFunctions::from_array([
            xi * yi * zi,
            x * yi * zi,
            x * y * zi,
            xi * y * zi,
            xi * yi * z,
            x * yi * z,
            x * y * z,
            xi * y * z,
        ])
    }

    fn differential_functions(&self, local: Vec3) -> DifferentialFunctions {
        let Vec3 { x, y, z } = local;
        let (xi, yi, zi) = (1.0 - x, 1.0 - y, 1.0 - z);
        DifferentialFunctions::from_blocks(
            [
                -yi * zi,
                yi * zi,
                y * zi,
                -y * zi,
                -yi * z,
                yi * z,
                y * z,
                -y * z,
            ],
            [
                -xi * zi,
                -x * zi,
                x * zi,
                xi * zi,
                -xi * z,
                -x * z,
                x * z,
                xi * z,
            ],
            [
                -xi * yi,
                -x * yi,
                -x * y,
                -xi * y,
                xi * yi,
                x * yi,
                x * y,
                xi * y,
            ],
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_weights() {
        let n = HexahedralCell.interpolation_functions(Vec3::splat(0.5));
        for &v in n.as_slice() {
            assert!((v - 0.125).abs() < 1e-7);
        }
    }

    #[test]
    fn test_contains_local() {
        assert!(HexahedralCell.contains_local(Vec3::new(0.0, 1.0, 0.5), 0.0));
        assert!(!HexahedralCell.contains_local(Vec3::new(0.5, 1.01, 0.5), 0.0));
    }
}
