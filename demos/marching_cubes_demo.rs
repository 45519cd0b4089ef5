#![allow(clippy::cast_precision_loss)]
//! Demo showing marching cubes on structured grids in isocell-rs.
//!
//! This demo showcases:
//! - Sampling a signed distance field on a uniform grid
//! - Marching cubes with shared vertices and smoothed normals
//! - Convergence of the surface area with grid resolution

use isocell::*;

fn main() -> Result<()> {
    env_logger::init();

    // Sphere SDF of radius 1 on [-1.5, 1.5]^3
    let sdf = |p: Vec3| p.length() - 1.0;
    let exact = 4.0 * std::f32::consts::PI;

    for n in [10_u32, 20, 40, 80] {
        let spacing = Vec3::splat(3.0 / (n - 1) as f32);
        let grid = StructuredVolume::from_fn(UVec3::splat(n), Vec3::splat(-1.5), spacing, sdf)?;
        let mesh = marching_cubes(&grid, 0.0);
        log::info!(
            "{n}^3 grid: {} triangles, {} vertices, area {:.4} (exact {exact:.4})",
            mesh.number_of_triangles(),
            mesh.number_of_vertices(),
            mesh.area()
        );
    }

    Ok(())
}
