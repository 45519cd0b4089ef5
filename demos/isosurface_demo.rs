#![allow(clippy::cast_precision_loss)]
//! Demo showing isosurface extraction on unstructured volumes in isocell-rs.
//!
//! This demo showcases:
//! - Building a tetrahedral volume from a sampled field
//! - Polygon and vertex normals
//! - Shared versus duplicated vertices
//! - Parallel extraction
//!
//! Run with `RUST_LOG=debug` to see the extractor's summaries.

use isocell::*;

/// Splits every cube of an `n^3` node grid over `[-1, 1]^3` into six tetrahedra.
fn torus_volume(n: u32) -> Result<UnstructuredVolume> {
    let h = 2.0 / (n - 1) as f32;
    let id = |x: u32, y: u32, z: u32| x + n * (y + n * z);

    let mut nodes = Vec::new();
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                nodes.push(UVec3::new(x, y, z).as_vec3() * h - Vec3::ONE);
            }
        }
    }
    // Distance to a torus with radii 0.6 and 0.25
    let values = nodes
        .iter()
        .map(|p| {
            let q = (p.truncate().length() - 0.6, p.z);
            (q.0 * q.0 + q.1 * q.1).sqrt() - 0.25
        })
        .collect();

    let mut cells = Vec::new();
    for z in 0..n - 1 {
        for y in 0..n - 1 {
            for x in 0..n - 1 {
                for axes in [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
                    let mut corner = [0_u32; 3];
                    let mut cell = [id(x, y, z); 4];
                    for (k, axis) in axes.into_iter().enumerate() {
                        corner[axis] = 1;
                        cell[k + 1] = id(x + corner[0], y + corner[1], z + corner[2]);
                    }
                    cells.push(cell);
                }
            }
        }
    }
    UnstructuredVolume::from_cells(CellType::Tetrahedra, &nodes, values, &cells)
}

fn main() -> Result<()> {
    env_logger::init();

    let volume = torus_volume(40)?;
    log::info!(
        "volume: {} nodes, {} cells, values in [{:.3}, {:.3}]",
        volume.number_of_nodes(),
        volume.number_of_cells(),
        volume.min_value(),
        volume.max_value()
    );

    // --- Polygon normals, one vertex triple per triangle ---
    let soup = extract_isosurface(&volume, &IsosurfaceOptions::with_isolevel(0.0))?;
    log::info!(
        "triangle soup: {} triangles, {} vertices, area {:.4}",
        soup.number_of_triangles(),
        soup.number_of_vertices(),
        soup.area()
    );

    // --- Vertex normals on a shared-vertex mesh, swept in parallel ---
    let options = IsosurfaceOptions {
        normal_type: NormalType::Vertex,
        duplication: false,
        parallel: true,
        ..IsosurfaceOptions::with_isolevel(0.0)
    };
    let mesh = extract_isosurface(&volume, &options)?;
    log::info!(
        "indexed mesh: {} triangles, {} vertices",
        mesh.number_of_triangles(),
        mesh.number_of_vertices()
    );
    log::info!("options: {}", options.to_json()?);

    // --- Nested shells ---
    for isolevel in [-0.1, 0.0, 0.1, 0.2] {
        let shell = extract_isosurface(&volume, &IsosurfaceOptions::with_isolevel(isolevel))?;
        log::info!("isolevel {isolevel:+.1}: area {:.4}", shell.area());
    }

    Ok(())
}
