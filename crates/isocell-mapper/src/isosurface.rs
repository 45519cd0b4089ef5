//! Isosurface extraction from unstructured volumes.
//!
//! Every cell is classified against the isolevel, the topology's case table names the
//! crossed edges, and each crossing point is placed on the straight reference-space edge
//! and mapped through the cell's interpolation functions. Quadratic tetrahedra are
//! polygonized per linear sub-tetrahedron of the midpoint subdivision, so their crossing
//! points follow the curved map.
//!
//! Emitted triangles are wound so that their normal points toward increasing field
//! values, independent of the cell's handedness.

use std::collections::HashMap;
use std::ops::Range;

use glam::{Mat3, Vec3};
use isocell_core::{
    CellType, IsocellError, IsosurfaceOptions, NormalType, PolygonObject, Result,
    UnstructuredVolume,
};
use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::cell::{Cell, MAX_NODES};
use crate::tables::quadratic_tetrahedra::SUBCELLS;
use crate::tables::{
    case_index, marching_hexahedra, marching_prism, marching_pyramid, marching_tetrahedra,
    CaseTable,
};

/// Cells per work unit of the sweep.
const CHUNK_SIZE: usize = 1024;

const IDENTITY: [usize; MAX_NODES] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// A crossing point on one cell edge.
#[derive(Debug, Clone, Copy)]
struct EdgeVertex {
    position: Vec3,
    normal: Vec3,
    // Unordered global node pair of the crossed edge
    key: (u32, u32),
}

type Triangle = [EdgeVertex; 3];

/// Extracts isosurfaces from unstructured volumes.
#[derive(Debug, Clone, Default)]
pub struct Isosurface {
    options: IsosurfaceOptions,
}

impl Isosurface {
    /// Creates an extractor with the given options.
    pub fn new(options: IsosurfaceOptions) -> Self {
        Self { options }
    }

    /// Returns the extraction options.
    pub fn options(&self) -> &IsosurfaceOptions {
        &self.options
    }

    /// Extracts the isosurface of a scalar volume.
    ///
    /// Fails on invalid options or on a volume with more than one field component.
    pub fn extract(&self, volume: &UnstructuredVolume) -> Result<PolygonObject> {
        self.options.validate()?;
        if volume.veclen() != 1 {
            return Err(IsocellError::UnsupportedVeclen(volume.veclen()));
        }

        let isolevel = self.options.isolevel;
        if isolevel < volume.min_value() || isolevel > volume.max_value() {
            warn!(
                "isolevel {isolevel} is outside the value range [{}, {}]",
                volume.min_value(),
                volume.max_value()
            );
        }

        let count = volume.number_of_cells();
        let starts: Vec<usize> = (0..count).step_by(CHUNK_SIZE).collect();
        let chunk =
            |start: usize| self.polygonize_range(volume, start..(start + CHUNK_SIZE).min(count));
        let chunks: Vec<Vec<Triangle>> = if self.options.parallel {
            starts.into_par_iter().map(chunk).collect::<Result<_>>()?
        } else {
            starts.into_iter().map(chunk).collect::<Result<_>>()?
        };

        let object = self.assemble(chunks.iter().flatten());
        debug!(
            "isosurface at {isolevel}: {count} {} cells, {} triangles, {} vertices",
            volume.cell_type().name(),
            object.number_of_triangles(),
            object.number_of_vertices()
        );
        Ok(object)
    }

    fn polygonize_range(
        &self,
        volume: &UnstructuredVolume,
        range: Range<usize>,
    ) -> Result<Vec<Triangle>> {
        let mut cell = Cell::new(volume);
        let mut triangles = Vec::new();
        for index in range {
            cell.bind(index)?;
            self.polygonize_cell(&cell, &mut triangles);
        }
        Ok(triangles)
    }

    fn polygonize_cell(&self, cell: &Cell<'_>, out: &mut Vec<Triangle>) {
        let topology = cell.topology();
        match topology.cell_type() {
            CellType::QuadraticTetrahedra => {
                for nodes in &SUBCELLS {
                    let [a, b, c, d] = nodes.map(|k| topology.reference_node(k));
                    // Sub-tetrahedra listed in mirrored order flip the table's handedness
                    let reference = Mat3::from_cols(a - d, b - d, c - d).determinant();
                    let center = (a + b + c + d) * 0.25;
                    let handedness = reference * cell.jacobi_matrix_at(center).determinant();
                    self.polygonize_subcell(
                        cell,
                        &marching_tetrahedra::TABLE,
                        nodes,
                        handedness,
                        out,
                    );
                }
            }
            cell_type => {
                let nodes = &IDENTITY[..cell.number_of_nodes()];
                let handedness = cell.jacobi_matrix_at(topology.centroid()).determinant();
                self.polygonize_subcell(cell, table_for(cell_type), nodes, handedness, out);
            }
        }
    }

    /// Polygonizes the nodes `nodes` of `cell` with `table`, whose node `i` is cell node
    /// `nodes[i]`.
    ///
    /// Table triangles face the below side in a positively oriented cell, so the whole
    /// case is flipped when `handedness` is positive. A degenerate cell decides by the
    /// summed orientation of its triangles against the field instead.
    fn polygonize_subcell(
        &self,
        cell: &Cell<'_>,
        table: &dyn CaseTable,
        nodes: &[usize],
        handedness: f32,
        out: &mut Vec<Triangle>,
    ) {
        let isolevel = self.options.isolevel;
        let case = case_index(nodes.iter().map(|&k| cell.node_scalar(k)), isolevel);
        let first = out.len();
        let mut score = 0.0;
        for edges in table.triangles(case) {
            let mut direction = Vec3::ZERO;
            let triangle = edges.map(|e| {
                let [a, b] = table.edge(e);
                let (a, b) = (nodes[a], nodes[b]);
                let (pa, pb) = (cell.coords()[a], cell.coords()[b]);
                direction += if cell.node_scalar(a) > isolevel {
                    pa - pb
                } else {
                    pb - pa
                };
                self.crossing(cell, a, b)
            });
            score += face_normal(&triangle).dot(direction);
            out.push(triangle);
        }

        let flip = if handedness.is_finite() && handedness != 0.0 {
            handedness > 0.0
        } else {
            score < 0.0
        };
        for triangle in &mut out[first..] {
            if flip {
                triangle.swap(1, 2);
            }
            let fallback = face_normal(triangle).normalize_or_zero();
            for vertex in triangle.iter_mut() {
                if vertex.normal == Vec3::ZERO {
                    vertex.normal = fallback;
                }
            }
        }
    }

    fn crossing(&self, cell: &Cell<'_>, a: usize, b: usize) -> EdgeVertex {
        let isolevel = self.options.isolevel;
        let (va, vb) = (cell.node_scalar(a), cell.node_scalar(b));
        let mut t = (isolevel - va) / (vb - va);
        if !t.is_finite() {
            trace!(
                "degenerate edge {a}-{b} in cell {:?}, snapping to node {a}",
                cell.index()
            );
            t = 0.0;
        }
        let t = t.clamp(0.0, 1.0);

        let (la, lb) = cell.topology().edge_local_points(a, b);
        let local = la.lerp(lb, t);
        let normal = match self.options.normal_type {
            NormalType::Vertex => cell.gradient_at(local).normalize_or_zero(),
            NormalType::Polygon => Vec3::ZERO,
        };
        let (ga, gb) = (cell.node_indices()[a], cell.node_indices()[b]);
        EdgeVertex {
            position: cell.transform_local_to_global(local),
            normal,
            key: (ga.min(gb), ga.max(gb)),
        }
    }

    fn assemble<'t>(&self, triangles: impl Iterator<Item = &'t Triangle>) -> PolygonObject {
        let normal_type = self.options.normal_type;
        let mut object = PolygonObject::new(normal_type);

        if self.options.duplication {
            for triangle in triangles {
                for vertex in triangle {
                    object.push_vertex(vertex.position);
                    if normal_type == NormalType::Vertex {
                        object.push_normal(vertex.normal);
                    }
                }
                if normal_type == NormalType::Polygon {
                    object.push_normal(face_normal(triangle).normalize_or_zero());
                }
            }
            return object;
        }

        let mut shared: HashMap<(u32, u32), u32> = HashMap::new();
        let mut accumulated: Vec<Vec3> = Vec::new();
        for triangle in triangles {
            let ids = triangle.map(|vertex| {
                *shared.entry(vertex.key).or_insert_with(|| {
                    accumulated.push(Vec3::ZERO);
                    object.push_vertex(vertex.position)
                })
            });
            for (&id, vertex) in ids.iter().zip(triangle) {
                accumulated[id as usize] += vertex.normal;
            }
            object.connections.extend_from_slice(&ids);
            if normal_type == NormalType::Polygon {
                object.push_normal(face_normal(triangle).normalize_or_zero());
            }
        }
        if normal_type == NormalType::Vertex {
            for normal in accumulated {
                object.push_normal(normal.normalize_or_zero());
            }
        }
        object
    }
}

/// Returns the case table of a linear cell type.
fn table_for(cell_type: CellType) -> &'static dyn CaseTable {
    match cell_type {
        CellType::Tetrahedra | CellType::QuadraticTetrahedra => &marching_tetrahedra::TABLE,
        CellType::Hexahedra => &marching_hexahedra::TABLE,
        CellType::Pyramid => &marching_pyramid::TABLE,
        CellType::Prism => &marching_prism::TABLE,
    }
}

#[inline]
fn face_normal(triangle: &Triangle) -> Vec3 {
    let [a, b, c] = triangle.map(|v| v.position);
    (b - a).cross(c - a)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cell::{CellTopology, PrismaticCell};
    use isocell_core::Xorshift128;
    use rand::Rng;
    use std::cell::RefCell;
    use std::collections::HashSet;

    const HEX_OFFSETS: [[u32; 3]; 8] = [
        [0, 0, 0],
        [1, 0, 0],
        [1, 1, 0],
        [0, 1, 0],
        [0, 0, 1],
        [1, 0, 1],
        [1, 1, 1],
        [0, 1, 1],
    ];

    const PERMUTATIONS: [[u32; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    fn grid_nodes(n: u32, f: &impl Fn(Vec3) -> f32) -> (Vec<Vec3>, Vec<f32>) {
        #[allow(clippy::cast_precision_loss)]
        let h = 1.0 / (n - 1) as f32;
        let mut nodes = Vec::new();
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    nodes.push(glam::UVec3::new(x, y, z).as_vec3() * h);
                }
            }
        }
        let values = nodes.iter().map(|&p| f(p)).collect();
        (nodes, values)
    }

    fn cube_cells(n: u32) -> Vec<[u32; 8]> {
        let id = |x: u32, y: u32, z: u32| x + n * (y + n * z);
        let mut cells = Vec::new();
        for z in 0..n - 1 {
            for y in 0..n - 1 {
                for x in 0..n - 1 {
                    cells.push(HEX_OFFSETS.map(|[dx, dy, dz]| id(x + dx, y + dy, z + dz)));
                }
            }
        }
        cells
    }

    /// Unit-cube grid of `(n - 1)^3` hexahedra.
    pub(crate) fn hex_grid(n: u32, f: impl Fn(Vec3) -> f32) -> UnstructuredVolume {
        let (nodes, values) = grid_nodes(n, &f);
        UnstructuredVolume::from_cells(CellType::Hexahedra, &nodes, values, &cube_cells(n))
            .expect("valid volume")
    }

    /// Unit-cube grid with every cube split into two prisms.
    fn prism_grid(n: u32, f: impl Fn(Vec3) -> f32) -> UnstructuredVolume {
        let (nodes, values) = grid_nodes(n, &f);
        let cells: Vec<[u32; 6]> = cube_cells(n)
            .into_iter()
            .flat_map(|h| {
                [
                    [h[0], h[1], h[3], h[4], h[5], h[7]],
                    [h[1], h[2], h[3], h[5], h[6], h[7]],
                ]
            })
            .collect();
        UnstructuredVolume::from_cells(CellType::Prism, &nodes, values, &cells)
            .expect("valid volume")
    }

    /// Unit-cube grid with every cube split into six pyramids around its center.
    ///
    /// The bottom face is listed clockwise from its apex, so both handednesses occur.
    fn pyramid_grid(n: u32, f: impl Fn(Vec3) -> f32) -> UnstructuredVolume {
        const FACES: [[usize; 4]; 6] = [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [1, 2, 6, 5],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
        ];
        let (mut nodes, mut values) = grid_nodes(n, &f);
        let mut cells = Vec::new();
        for h in cube_cells(n) {
            let center = h.iter().map(|&i| nodes[i as usize]).sum::<Vec3>() / 8.0;
            #[allow(clippy::cast_possible_truncation)]
            let apex = nodes.len() as u32;
            nodes.push(center);
            values.push(f(center));
            for face in FACES {
                cells.push([apex, h[face[0]], h[face[1]], h[face[2]], h[face[3]]]);
            }
        }
        UnstructuredVolume::from_cells(CellType::Pyramid, &nodes, values, &cells)
            .expect("valid volume")
    }

    /// Asserts that no two triangles run along an edge in the same direction.
    fn assert_consistent_winding(object: &PolygonObject) -> HashSet<(usize, usize)> {
        let mut directed = HashSet::new();
        for t in 0..object.number_of_triangles() {
            let [a, b, c] = object.triangle_indices(t);
            for edge in [(a, b), (b, c), (c, a)] {
                assert!(directed.insert(edge), "edge {edge:?} used twice in one direction");
            }
        }
        directed
    }

    /// Unit-cube grid with every cube split into six tetrahedra along its main diagonal.
    pub(crate) fn tet_grid(n: u32, f: impl Fn(Vec3) -> f32) -> UnstructuredVolume {
        let (nodes, values) = grid_nodes(n, &f);
        let id = |x: u32, y: u32, z: u32| x + n * (y + n * z);
        let mut cells = Vec::new();
        for z in 0..n - 1 {
            for y in 0..n - 1 {
                for x in 0..n - 1 {
                    for axes in PERMUTATIONS {
                        let mut corner = [0_u32; 3];
                        let mut cell = [id(x, y, z); 4];
                        for (k, axis) in axes.into_iter().enumerate() {
                            corner[axis as usize] = 1;
                            cell[k + 1] = id(x + corner[0], y + corner[1], z + corner[2]);
                        }
                        cells.push(cell);
                    }
                }
            }
        }
        UnstructuredVolume::from_cells(CellType::Tetrahedra, &nodes, values, &cells)
            .expect("valid volume")
    }

    pub(crate) fn sphere(p: Vec3) -> f32 {
        (p - Vec3::splat(0.5)).length() - 0.3
    }

    fn options(isolevel: f32) -> IsosurfaceOptions {
        IsosurfaceOptions::with_isolevel(isolevel)
    }

    #[test]
    fn test_uniform_hexahedron_is_empty() {
        let volume = hex_grid(2, |_| 1.0);
        let object = Isosurface::new(options(0.5))
            .extract(&volume)
            .expect("extraction failed");
        assert!(object.is_empty());
        assert_eq!(object.number_of_vertices(), 0);
    }

    #[test]
    fn test_tetrahedron_split_into_two_triangles() {
        let nodes = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::ZERO];
        let volume = UnstructuredVolume::from_cells(
            CellType::Tetrahedra,
            &nodes,
            vec![0.0, 0.0, 1.0, 1.0],
            &[[0, 1, 2, 3]],
        )
        .expect("valid volume");
        let object = Isosurface::new(options(0.5))
            .extract(&volume)
            .expect("extraction failed");

        assert_eq!(object.number_of_triangles(), 2);
        let midpoints: Vec<Vec3> = [(0, 2), (0, 3), (1, 2), (1, 3)]
            .iter()
            .map(|&(a, b)| (nodes[a] + nodes[b]) * 0.5)
            .collect();
        for &v in object.vertices() {
            let v = Vec3::from_array(v);
            assert!(
                midpoints.iter().any(|m| (*m - v).length() < 1e-6),
                "{v:?} is not a crossing-edge midpoint"
            );
        }
        // Both triangles face node 2 and 3, the high side
        for t in 0..2 {
            let [a, b, c] = object.triangle(t);
            let n = (b - a).cross(c - a);
            assert!(n.dot(Vec3::new(-1.0, -1.0, 1.0)) > 0.0);
        }
    }

    #[test]
    fn test_pyramid_apex_edges() {
        let volume = UnstructuredVolume::from_cells(
            CellType::Pyramid,
            &[
                Vec3::new(0.5, 0.5, 1.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
            &[[0, 1, 2, 3, 4]],
        )
        .expect("valid volume");
        let object = Isosurface::new(options(0.5))
            .extract(&volume)
            .expect("extraction failed");
        assert_eq!(object.number_of_triangles(), 2);
        for &[x, y, z] in object.vertices() {
            assert!((z - 0.5).abs() < 1e-6);
            assert!((x - 0.5).abs() - 0.25 < 1e-6 && (y - 0.5).abs() - 0.25 < 1e-6);
        }
        assert!((object.area() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_prism_cross_section() {
        let volume = UnstructuredVolume::from_cells(
            CellType::Prism,
            &[
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 2.0),
                Vec3::new(1.0, 0.0, 2.0),
                Vec3::new(0.0, 1.0, 2.0),
            ],
            vec![0.0, 0.0, 0.0, 2.0, 2.0, 2.0],
            &[[0, 1, 2, 3, 4, 5]],
        )
        .expect("valid volume");
        let object = Isosurface::new(options(0.5))
            .extract(&volume)
            .expect("extraction failed");
        assert!((object.area() - 0.5).abs() < 1e-5);
        for &[_, _, z] in object.vertices() {
            assert!((z - 0.5).abs() < 1e-6);
        }
        for t in 0..object.number_of_triangles() {
            let [a, b, c] = object.triangle(t);
            assert!((b - a).cross(c - a).z > 0.0);
        }
    }

    #[test]
    fn test_quadratic_tetrahedron_follows_curved_map() {
        // A single reference-shaped cell whose mid-edge node 4 is pushed off the edge
        let mut nodes: Vec<Vec3> = (0..10)
            .map(|k| crate::cell::topology_for(CellType::QuadraticTetrahedra).reference_node(k))
            .collect();
        nodes[4] += Vec3::new(0.0, -0.1, 0.0);
        let values = vec![0.0, 1.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.5, 0.0, 0.5];
        let volume = UnstructuredVolume::from_cells(
            CellType::QuadraticTetrahedra,
            &nodes,
            values,
            &[[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]],
        )
        .expect("valid volume");
        let object = Isosurface::new(options(0.25))
            .extract(&volume)
            .expect("extraction failed");
        assert!(!object.is_empty());

        // The crossing on the 0-4 sub-edge is mapped through the bent edge
        let mut cell = Cell::new(&volume);
        cell.bind(0).expect("bind failed");
        let expected = cell.transform_local_to_global(Vec3::new(0.25, 0.0, 0.0));
        assert!((expected.y + 0.075).abs() < 1e-6);
        assert!(object
            .vertices()
            .iter()
            .any(|&v| (Vec3::from_array(v) - expected).length() < 1e-6));
    }

    #[test]
    fn test_normals_follow_increasing_values() {
        let volume = hex_grid(4, |p| p.x + 0.1 * p.y);
        let object = Isosurface::new(options(0.45))
            .extract(&volume)
            .expect("extraction failed");
        assert!(!object.is_empty());
        for &[nx, _, _] in object.normal_vectors() {
            assert!(nx > 0.9);
        }
    }

    #[test]
    fn test_polygon_and_vertex_normal_counts() {
        let volume = tet_grid(5, sphere);
        let polygon = Isosurface::new(options(0.0))
            .extract(&volume)
            .expect("extraction failed");
        assert_eq!(polygon.normals.len(), 3 * polygon.number_of_triangles());

        let vertex = Isosurface::new(IsosurfaceOptions {
            normal_type: NormalType::Vertex,
            ..options(0.0)
        })
        .extract(&volume)
        .expect("extraction failed");
        assert_eq!(vertex.normals.len(), vertex.coords.len());
    }

    #[test]
    fn test_vertex_normals_point_outward() {
        let volume = tet_grid(16, sphere);
        let object = Isosurface::new(IsosurfaceOptions {
            normal_type: NormalType::Vertex,
            duplication: false,
            ..options(0.0)
        })
        .extract(&volume)
        .expect("extraction failed");
        for (p, n) in object.vertices().iter().zip(object.normal_vectors()) {
            let radial = (Vec3::from_array(*p) - Vec3::splat(0.5)).normalize();
            let n = Vec3::from_array(*n);
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.dot(radial) > 0.7, "normal {n:?} at {p:?}");
        }
    }

    #[test]
    fn test_sphere_on_tetrahedra() {
        let volume = tet_grid(12, sphere);
        let object = Isosurface::new(options(0.0))
            .extract(&volume)
            .expect("extraction failed");
        assert!(object.number_of_triangles() > 100);
        for &p in object.vertices() {
            let r = (Vec3::from_array(p) - Vec3::splat(0.5)).length();
            assert!((r - 0.3).abs() < 0.05, "vertex at radius {r}");
        }
        let expected = 4.0 * std::f32::consts::PI * 0.09;
        assert!((object.area() - expected).abs() < 0.15 * expected);
    }

    #[test]
    fn test_shared_vertices_form_a_closed_surface() {
        let volume = tet_grid(10, sphere);
        let object = Isosurface::new(IsosurfaceOptions {
            duplication: false,
            ..options(0.0)
        })
        .extract(&volume)
        .expect("extraction failed");
        assert!(object.number_of_vertices() < 3 * object.number_of_triangles());

        let directed = assert_consistent_winding(&object);
        for &(a, b) in &directed {
            assert!(directed.contains(&(b, a)), "edge ({a}, {b}) is on a boundary");
        }
    }

    #[test]
    fn test_winding_is_consistent_on_random_fields() {
        let shared = IsosurfaceOptions {
            duplication: false,
            ..options(0.0)
        };
        for seed in 0..20 {
            let rng = RefCell::new(Xorshift128::new(seed));
            let noise = |_: Vec3| rng.borrow_mut().gen_range(-0.5_f32..0.5);
            for volume in [hex_grid(6, noise), prism_grid(6, noise), pyramid_grid(6, noise)] {
                let object = Isosurface::new(shared.clone())
                    .extract(&volume)
                    .expect("extraction failed");
                assert!(!object.is_empty(), "{:?} seed {seed}", volume.cell_type());
                assert_consistent_winding(&object);
            }
        }
    }

    #[test]
    fn test_prism_hexagon_keeps_one_winding() {
        // Nodes 2 and 4 below, joined across the ambiguous side face into a hexagon
        let nodes: Vec<Vec3> = (0..6).map(|k| PrismaticCell.reference_node(k)).collect();
        let values = vec![1.0, 0.2, -0.9, 0.7, -0.1, 0.3];
        let volume =
            UnstructuredVolume::from_cells(CellType::Prism, &nodes, values, &[[0, 1, 2, 3, 4, 5]])
                .expect("valid volume");
        let object = Isosurface::new(IsosurfaceOptions {
            duplication: false,
            ..options(0.0)
        })
        .extract(&volume)
        .expect("extraction failed");
        assert!(object.number_of_triangles() >= 4);
        assert_consistent_winding(&object);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let volume = tet_grid(16, sphere);
        assert!(volume.number_of_cells() > 2 * CHUNK_SIZE);
        for duplication in [true, false] {
            let serial = IsosurfaceOptions {
                duplication,
                normal_type: NormalType::Vertex,
                ..options(0.0)
            };
            let parallel = IsosurfaceOptions {
                parallel: true,
                ..serial.clone()
            };
            let a = Isosurface::new(serial).extract(&volume).expect("serial failed");
            let b = Isosurface::new(parallel)
                .extract(&volume)
                .expect("parallel failed");
            assert_eq!(a.coords, b.coords);
            assert_eq!(a.normals, b.normals);
            assert_eq!(a.connections, b.connections);
        }
    }

    #[test]
    fn test_isolevel_outside_range_is_empty() {
        let volume = tet_grid(4, sphere);
        let object = Isosurface::new(options(10.0))
            .extract(&volume)
            .expect("extraction failed");
        assert!(object.is_empty());
    }

    #[test]
    fn test_rejects_vector_fields() {
        let volume = UnstructuredVolume::new(
            CellType::Tetrahedra,
            3,
            vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
            vec![0.0; 12],
            vec![0, 1, 2, 3],
        )
        .expect("valid volume");
        let result = Isosurface::default().extract(&volume);
        assert!(matches!(result, Err(IsocellError::UnsupportedVeclen(3))));
    }

    #[test]
    fn test_rejects_non_finite_isolevel() {
        let volume = tet_grid(2, sphere);
        let result = Isosurface::new(options(f32::NAN)).extract(&volume);
        assert!(matches!(result, Err(IsocellError::InvalidOptions(_))));
    }
}
