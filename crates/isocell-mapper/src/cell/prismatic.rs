use glam::Vec3;
use isocell_core::CellType;

use super::{CellTopology, DifferentialFunctions, InterpolationFunctions, QuadraturePoint};

const NODES: [Vec3; 6] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(0.0, 1.0, 1.0),
];

const A: f32 = 1.0 / 6.0;
const B: f32 = 2.0 / 3.0;
const G0: f32 = 0.211_324_87;
const G1: f32 = 0.788_675_1;

// 3-point triangle rule times 2-point Gauss along z
const QUADRATURE: [QuadraturePoint; 6] = [
    QuadraturePoint::new(A, A, G0, 1.0 / 12.0),
    QuadraturePoint::new(B, A, G0, 1.0 / 12.0),
    QuadraturePoint::new(A, B, G0, 1.0 / 12.0),
    QuadraturePoint::new(A, A, G1, 1.0 / 12.0),
    QuadraturePoint::new(B, A, G1, 1.0 / 12.0),
    QuadraturePoint::new(A, B, G1, 1.0 / 12.0),
];

/// Six-node triangular prism: linear triangle basis times linear `z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrismaticCell;

impl CellTopology for PrismaticCell {
    fn cell_type(&self) -> CellType {
        CellType::Prism
    }

    fn reference_node(&self, index: usize) -> Vec3 {
        NODES[index]
    }

    fn interpolation_functions(&self, local: Vec3) -> InterpolationFunctions {
        let Vec3 { x, y, z } = local;
        let w = 1.0 - x - y;
        let zi = 1.0 - z;
        InterpolationFunctions::from_array([w * zi, x * zi, y * zi, w * z, x * z, y * z])
    }

    fn differential_functions(&self, local: Vec3) -> DifferentialFunctions {
        let Vec3 { x, y, z } = local;
        let w = 1.0 - x - y;
        let zi = 1.0 - z;
        DifferentialFunctions::from_blocks(
            [-zi, zi, 0.0, -z, z, 0.0],
            [-zi, 0.0, zi, -z, 0.0, z],
            [-w, -x, -y, w, x, y],
        )
    }

    fn fold_uniform(&self, stu: Vec3) -> Vec3 {
        let Vec3 { x: s, y: t, z: u } = stu;
        if s + t > 1.0 {
            Vec3::new(1.0 - s, 1.0 - t, u)
        } else {
            Vec3::new(s, t, u)
        }
    }

    fn volume_quadrature(&self) -> &'static [QuadraturePoint] {
        &QUADRATURE
    }

    fn contains_local(&self, local: Vec3, tolerance: f32) -> bool {
        local.min_element() >= -tolerance
            && local.x + local.y <= 1.0 + tolerance
            && local.z <= 1.0 + tolerance
    }
}
