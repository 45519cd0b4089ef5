#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
//! Integration tests for the isocell-rs mappers.
//!
//! These run whole volumes through the public entry points and compare the results
//! across cell types and across the structured and unstructured paths.

use isocell::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

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

/// Nodes of an `n^3` grid over the unit cube.
fn grid_nodes(n: u32) -> Vec<Vec3> {
    let h = 1.0 / (n - 1) as f32;
    let mut nodes = Vec::new();
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                nodes.push(UVec3::new(x, y, z).as_vec3() * h);
            }
        }
    }
    nodes
}

fn grid_cells(n: u32) -> Vec<[u32; 8]> {
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

/// Unit-cube grid of hexahedra.
fn hexahedra(n: u32, f: impl Fn(Vec3) -> f32) -> UnstructuredVolume {
    let nodes = grid_nodes(n);
    let values = nodes.iter().map(|&p| f(p)).collect();
    UnstructuredVolume::from_cells(CellType::Hexahedra, &nodes, values, &grid_cells(n))
        .expect("valid volume")
}

/// Unit-cube grid with every cube split into two prisms.
fn prisms(n: u32, f: impl Fn(Vec3) -> f32) -> UnstructuredVolume {
    let nodes = grid_nodes(n);
    let values = nodes.iter().map(|&p| f(p)).collect();
    let cells: Vec<[u32; 6]> = grid_cells(n)
        .into_iter()
        .flat_map(|h| {
            [
                [h[0], h[1], h[3], h[4], h[5], h[7]],
                [h[1], h[2], h[3], h[5], h[6], h[7]],
            ]
        })
        .collect();
    UnstructuredVolume::from_cells(CellType::Prism, &nodes, values, &cells).expect("valid volume")
}

/// Unit-cube grid with every cube split into six pyramids around its center.
fn pyramids(n: u32, f: impl Fn(Vec3) -> f32) -> UnstructuredVolume {
    const FACES: [[usize; 4]; 6] = [
        [0, 3, 2, 1],
        [4, 5, 6, 7],
        [0, 1, 5, 4],
        [1, 2, 6, 5],
        [2, 3, 7, 6],
        [3, 0, 4, 7],
    ];
    let mut nodes = grid_nodes(n);
    let mut cells = Vec::new();
    for h in grid_cells(n) {
        let center = h.iter().map(|&i| nodes[i as usize]).sum::<Vec3>() / 8.0;
        let apex = nodes.len() as u32;
        nodes.push(center);
        for face in FACES {
            cells.push([apex, h[face[0]], h[face[1]], h[face[2]], h[face[3]]]);
        }
    }
    let values = nodes.iter().map(|&p| f(p)).collect();
    UnstructuredVolume::from_cells(CellType::Pyramid, &nodes, values, &cells)
        .expect("valid volume")
}

fn sphere(p: Vec3) -> f32 {
    (p - Vec3::splat(0.5)).length() - 0.3
}

#[test]
fn test_uniform_hexahedron() {
    let volume = hexahedra(2, |_| 1.0);
    let surface =
        extract_isosurface(&volume, &IsosurfaceOptions::with_isolevel(0.5)).expect("extract");
    assert!(surface.is_empty());
}

#[test]
fn test_tetrahedron_split() {
    let nodes = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::ZERO];
    let volume = UnstructuredVolume::from_cells(
        CellType::Tetrahedra,
        &nodes,
        vec![0.0, 0.0, 1.0, 1.0],
        &[[0, 1, 2, 3]],
    )
    .expect("valid volume");
    let surface =
        extract_isosurface(&volume, &IsosurfaceOptions::with_isolevel(0.5)).expect("extract");
    assert_eq!(surface.number_of_triangles(), 2);
    // The crossing quadrilateral spans the midpoints of edges 0-2, 0-3, 1-2 and 1-3
    let area = 0.5 * (nodes[2] - nodes[0]).cross(nodes[3] - nodes[1]).length() * 0.5;
    assert!((surface.area() - area).abs() < 1e-5);
}

#[test]
fn test_planar_surface_in_every_cell_type() {
    // A linear field is reproduced exactly, so every cell type cuts the same plane
    let field = |p: Vec3| p.z;
    let volumes = [hexahedra(4, field), prisms(4, field), pyramids(4, field)];
    for volume in &volumes {
        let surface = extract_isosurface(volume, &IsosurfaceOptions::with_isolevel(0.4))
            .expect("extract");
        assert!(
            (surface.area() - 1.0).abs() < 1e-4,
            "{:?}: area {}",
            volume.cell_type(),
            surface.area()
        );
        for &[_, _, z] in surface.vertices() {
            assert!((z - 0.4).abs() < 1e-5);
        }
        for &[_, _, nz] in surface.normal_vectors() {
            assert!(nz > 0.999, "{:?}", volume.cell_type());
        }
    }
}

#[test]
fn test_structured_and_unstructured_agree() {
    let n = 14;
    let hex = hexahedra(n, sphere);
    let grid = StructuredVolume::from_fn(
        UVec3::splat(n),
        Vec3::ZERO,
        Vec3::splat(1.0 / (n - 1) as f32),
        sphere,
    )
    .expect("valid grid");

    let unstructured =
        extract_isosurface(&hex, &IsosurfaceOptions::with_isolevel(0.0)).expect("extract");
    let structured = marching_cubes(&grid, 0.0);

    assert_eq!(unstructured.number_of_triangles(), structured.number_of_triangles());
    let relative = (unstructured.area() - structured.area()).abs() / structured.area();
    assert!(relative < 1e-3, "areas differ by {relative}");
}

#[test]
fn test_sampling_density() {
    let volume = prisms(9, sphere);
    let options = SamplingOptions {
        density: 2000.0,
        seed: 42,
    };
    let particles = sample_particles(&volume, &options).expect("sample");
    // Unit cube, so 2000 particles in expectation
    let n = particles.number_of_points() as f32;
    assert!((n - 2000.0).abs() < 60.0, "{n} particles");

    let inside = particles.values.iter().filter(|&&v| v < 0.0).count() as f32;
    let expected = 4.0 / 3.0 * std::f32::consts::PI * 0.027;
    assert!((inside / n - expected).abs() < 0.03);
}

#[test]
fn test_cell_with_external_generator() {
    let volume = pyramids(2, sphere);
    let mut cell = Cell::new(&volume);
    let mut rng = StdRng::seed_from_u64(9);
    for index in 0..volume.number_of_cells() {
        cell.bind(index).expect("bind");
        for _ in 0..100 {
            let p = cell.random_sampling(&mut rng);
            assert!(p.cmpge(Vec3::splat(-1e-5)).all() && p.cmple(Vec3::splat(1.0 + 1e-5)).all());
        }
    }
    assert!(cell.bind(volume.number_of_cells()).is_err());
}

#[test]
fn test_cell_volumes_tile_the_cube() {
    for volume in [hexahedra(3, sphere), prisms(3, sphere), pyramids(3, sphere)] {
        let mut cell = Cell::new(&volume);
        let total: f32 = (0..volume.number_of_cells())
            .map(|i| {
                cell.bind(i).expect("bind");
                cell.volume()
            })
            .sum();
        assert!((total - 1.0).abs() < 1e-4, "{:?}: {total}", volume.cell_type());
    }
}

#[test]
fn test_options_from_json() {
    let options = IsosurfaceOptions::from_json(r#"{"isolevel": 0.25, "normal_type": "Vertex"}"#)
        .expect("parse");
    assert_eq!(options.normal_type, NormalType::Vertex);
    assert!(options.duplication);

    let volume = hexahedra(6, sphere);
    let surface = extract_isosurface(&volume, &options).expect("extract");
    assert_eq!(surface.normals.len(), surface.coords.len());

    assert!(matches!(
        SamplingOptions::from_json(r#"{"density": -2.0}"#),
        Err(IsocellError::InvalidOptions(_))
    ));
}

proptest! {
    #[test]
    fn prop_isosurface_vertices_lie_on_linear_field(isolevel in 0.05_f32..0.95) {
        let volume = hexahedra(3, |p| 0.5 * p.x + 0.3 * p.y + 0.2 * p.z);
        let surface = extract_isosurface(&volume, &IsosurfaceOptions::with_isolevel(isolevel))
            .expect("extract");
        prop_assert!(!surface.is_empty());
        for &[x, y, z] in surface.vertices() {
            prop_assert!((0.5 * x + 0.3 * y + 0.2 * z - isolevel).abs() < 1e-5);
        }
    }
}
