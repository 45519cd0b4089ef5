//! Linear tetrahedral cell.

use glam::Vec3;
use isocell_core::CellType;

use super::{CellTopology, DifferentialFunctions, InterpolationFunctions, QuadraturePoint};

const NODES: [Vec3; 4] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, 0.0),
];

const QUADRATURE: [QuadraturePoint; 1] = [QuadraturePoint::new(0.25, 0.25, 0.25, 1.0 / 6.0)];

/// Four-node tetrahedron with barycentric basis `N = (x, y, z, 1 - x - y - z)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TetrahedralCell;

impl CellTopology for TetrahedralCell {
    fn cell_type(&self) -> CellType {
        CellType::Tetrahedra
    }

    fn reference_node(&self, index: usize) -> Vec3 {
        NODES[index]
    }

    fn interpolation_functions(&self, local: Vec3) -> InterpolationFunctions {
        let Vec3 { x, y, z } = local;
        InterpolationFunctions::from_array([x, y, z, 1.0 - x - y - z])
    }

    fn differential_functions(&self, _local: Vec3) -> DifferentialFunctions {
        DifferentialFunctions::from_blocks(
            [1.0, 0.0, 0.0, -1.0],
            [0.0, 1.0, 0.0, -1.0],
            [0.0, 0.0, 1.0, -1.0],
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

/// Folds the unit cube onto the reference simplex `x, y, z >= 0, x + y + z <= 1`.
///
/// The cube splits into six congruent pieces of the simplex's volume; each piece is
/// mapped onto the simplex by a volume-preserving affine map, so a uniform point of the
/// cube lands on a uniform point of the simplex.
pub(crate) fn fold_into_simplex(stu: Vec3) -> Vec3 {
    let Vec3 { x: s, y: t, z: u } = stu;
    if s + t + u <= 1.0 {
        Vec3::new(s, t, u)
    } else if s - t + u >= 1.0 {
        Vec3::new(1.0 - u, 1.0 - s, t)
    } else if s + t - u >= 1.0 {
        Vec3::new(1.0 - s, 1.0 - t, u)
    } else if -s + t + u >= 1.0 {
        Vec3::new(1.0 - u, s, 1.0 - t)
    } else {
        Vec3::new(
            0.5 * s - 0.5 * t - 0.5 * u + 0.5,
            -0.5 * s + 0.5 * t - 0.5 * u + 0.5,
            -0.5 * s - 0.5 * t + 0.5 * u + 0.5,
        )
    }
}

pub(crate) fn simplex_contains(local: Vec3, tolerance: f32) -> bool {
    local.min_element() >= -tolerance && local.element_sum() <= 1.0 + tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_branches() {
        // One representative from each branch of the fold
        let cases = [
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(0.9, 0.1, 0.5),
            Vec3::new(0.7, 0.6, 0.1),
            Vec3::new(0.1, 0.7, 0.6),
            Vec3::new(0.6, 0.6, 0.6),
        ];
        for stu in cases {
            let p = fold_into_simplex(stu);
            assert!(simplex_contains(p, 1e-6), "{stu:?} folds to {p:?}");
        }
    }

    #[test]
    fn test_fold_keeps_simplex_points() {
        let p = Vec3::new(0.2, 0.3, 0.4);
        assert_eq!(fold_into_simplex(p), p);
    }

    #[test]
    fn test_centroid() {
        let c = TetrahedralCell.centroid();
        assert!((c - Vec3::splat(0.25)).length() < 1e-6);
    }

    #[test]
    fn test_contains_local() {
        assert!(TetrahedralCell.contains_local(Vec3::splat(0.3), 0.0));
        assert!(!TetrahedralCell.contains_local(Vec3::splat(0.4), 0.0));
        assert!(!TetrahedralCell.contains_local(Vec3::new(-0.1, 0.2, 0.2), 0.0));
    }
}
