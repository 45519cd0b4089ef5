//! Marching cubes isosurface extraction on structured grids.
//!
//! Edge vertices are cached in a two-slab index buffer (modular z), so every grid edge
//! crossed by the surface yields exactly one shared vertex.

#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use glam::{UVec3, Vec3};
use isocell_core::{NormalType, PolygonObject, StructuredVolume};
use log::debug;

use crate::tables::marching_cubes::{TABLE, VERTEX_ID};
use crate::tables::{case_index, CaseTable};

/// Extracts the `isolevel` surface of a structured volume.
///
/// Returns an indexed mesh in world coordinates with one normalized normal per vertex,
/// accumulated from the adjacent faces. Triangles face increasing values.
pub fn marching_cubes(volume: &StructuredVolume, isolevel: f32) -> PolygonObject {
    let size = volume.resolution();
    let mut mesh = PolygonObject::new(NormalType::Vertex);
    let mut normals: Vec<Vec3> = Vec::new();

    // Vertex index for each of the 3 edge axes at each (x, y) position of two z slabs
    let slab_len = size.x as usize * size.y as usize * 2;
    let mut slab_inds: Vec<[u32; 3]> = vec![[0; 3]; slab_len];

    let mut vs = [0.0_f32; 8];
    let mut edge_indices = [0_u32; 12];

    for z in 0..size.z - 1 {
        for y in 0..size.y - 1 {
            for x in 0..size.x - 1 {
                let base = UVec3::new(x, y, z);
                for (c, v) in vs.iter_mut().enumerate() {
                    let p = base + corner_offset(c);
                    *v = volume.value(p.x, p.y, p.z) - isolevel;
                }

                let case = case_index(vs, 0.0);
                if case == 0 || case == 255 {
                    continue;
                }

                for (e, [start, _]) in VERTEX_ID.iter().enumerate() {
                    let axis = e / 4;
                    let start = UVec3::from_array(*start);
                    // Edges on the low faces were produced by an earlier cell
                    let owned = (0..3).all(|b| b == axis || start[b] == 1 || base[b] == 0);
                    if owned {
                        let [a, b] = TABLE.edge(e);
                        compute_edge(
                            volume,
                            &mut slab_inds,
                            &mut mesh,
                            &mut normals,
                            vs[a],
                            vs[b],
                            axis,
                            base + start,
                        );
                    }
                    edge_indices[e] = slab_inds[slab_index(base + start, size)][axis];
                }

                for [a, b, c] in TABLE.triangles(case) {
                    let (ia, ib, ic) = (edge_indices[a], edge_indices[c], edge_indices[b]);
                    mesh.connections.extend_from_slice(&[ia, ib, ic]);
                    accumulate_normal(&mesh, &mut normals, ia, ib, ic);
                }
            }
        }
    }

    for normal in normals {
        mesh.push_normal(normal.normalize_or_zero());
    }

    debug!(
        "marching cubes at {isolevel}: {} cells, {} triangles, {} vertices",
        volume.number_of_cells(),
        mesh.number_of_triangles(),
        mesh.number_of_vertices()
    );
    mesh
}

/// Grid offset of cube corner `c`.
#[inline]
fn corner_offset(c: usize) -> UVec3 {
    let c = c as u32;
    UVec3::new(c & 1, (c >> 1) & 1, (c >> 2) & 1)
}

/// Converts grid coordinates to a slab index (modular z for memory reuse).
#[inline]
fn slab_index(p: UVec3, size: UVec3) -> usize {
    (size.x as usize) * (size.y as usize) * ((p.z as usize) % 2)
        + (p.y as usize) * (size.x as usize)
        + (p.x as usize)
}

/// Creates the vertex where the surface crosses the edge starting at `start`, if the two
/// shifted end values lie on opposite sides, and records its index in the slab buffer.
#[inline]
#[allow(clippy::too_many_arguments)]
fn compute_edge(
    volume: &StructuredVolume,
    slab_inds: &mut [[u32; 3]],
    mesh: &mut PolygonObject,
    normals: &mut Vec<Vec3>,
    va: f32,
    vb: f32,
    axis: usize,
    start: UVec3,
) {
    if (va > 0.0) == (vb > 0.0) {
        return;
    }
    let mut grid = start.as_vec3();
    grid[axis] += va / (va - vb);
    let idx = mesh.push_vertex(volume.position(grid));
    slab_inds[slab_index(start, volume.resolution())][axis] = idx;
    normals.push(Vec3::ZERO);
}

/// Accumulates the geometric normal of triangle (a, b, c) to all three vertices.
#[inline]
fn accumulate_normal(mesh: &PolygonObject, normals: &mut [Vec3], a: u32, b: u32, c: u32) {
    let vertices = mesh.vertices();
    let va = Vec3::from_array(vertices[a as usize]);
    let vb = Vec3::from_array(vertices[b as usize]);
    let vc = Vec3::from_array(vertices[c as usize]);
    let n = (vb - va).cross(vc - va);
    normals[a as usize] += n;
    normals[b as usize] += n;
    normals[c as usize] += n;
}
