//! Polygon and point objects produced by the mappers.

use glam::Vec3;

use crate::options::NormalType;

/// A triangle soup or indexed triangle mesh.
///
/// When `connections` is empty, every three consecutive vertices form a triangle.
/// Otherwise `connections` holds three vertex indices per triangle.
#[derive(Debug, Clone, Default)]
pub struct PolygonObject {
    /// Vertex positions, 3 floats per vertex.
    pub coords: Vec<f32>,
    /// Normals, 3 floats per triangle (`Polygon`) or per vertex (`Vertex`).
    pub normals: Vec<f32>,
    /// Triangle vertex indices (empty for a triangle soup).
    pub connections: Vec<u32>,
    /// Where the normals are attached.
    pub normal_type: NormalType,
}

impl PolygonObject {
    /// Creates an empty object with the given normal type.
    pub fn new(normal_type: NormalType) -> Self {
        Self {
            normal_type,
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    pub fn number_of_vertices(&self) -> usize {
        self.coords.len() / 3
    }

    /// Returns the number of triangles.
    pub fn number_of_triangles(&self) -> usize {
        if self.connections.is_empty() {
            self.number_of_vertices() / 3
        } else {
            self.connections.len() / 3
        }
    }

    /// Returns true if the object has no triangles.
    pub fn is_empty(&self) -> bool {
        self.number_of_triangles() == 0
    }

    /// Returns the vertex positions as `[x, y, z]` triples.
    pub fn vertices(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.coords)
    }

    /// Returns the normals as `[x, y, z]` triples.
    pub fn normal_vectors(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Returns the three vertex indices of triangle `index`.
    pub fn triangle_indices(&self, index: usize) -> [usize; 3] {
        if self.connections.is_empty() {
            [3 * index, 3 * index + 1, 3 * index + 2]
        } else {
            let c = &self.connections[3 * index..3 * index + 3];
            [c[0] as usize, c[1] as usize, c[2] as usize]
        }
    }

    /// Returns the three corner positions of triangle `index`.
    pub fn triangle(&self, index: usize) -> [Vec3; 3] {
        let vertices = self.vertices();
        self.triangle_indices(index)
            .map(|i| Vec3::from_array(vertices[i]))
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, position: Vec3) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let index = self.number_of_vertices() as u32;
        self.coords.extend_from_slice(&position.to_array());
        index
    }

    /// Appends a normal.
    pub fn push_normal(&mut self, normal: Vec3) {
        self.normals.extend_from_slice(&normal.to_array());
    }

    /// Returns the total surface area.
    pub fn area(&self) -> f32 {
        (0..self.number_of_triangles())
            .map(|t| {
                let [a, b, c] = self.triangle(t);
                0.5 * (b - a).cross(c - a).length()
            })
            .sum()
    }
}

/// A set of particles with one scalar each.
#[derive(Debug, Clone, Default)]
pub struct PointObject {
    /// Particle positions, 3 floats per point.
    pub coords: Vec<f32>,
    /// One interpolated scalar per point.
    pub values: Vec<f32>,
}

impl PointObject {
    /// Returns the number of points.
    pub fn number_of_points(&self) -> usize {
        self.coords.len() / 3
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the point positions as `[x, y, z]` triples.
    pub fn points(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.coords)
    }

    /// Appends a point.
    pub fn push(&mut self, position: Vec3, value: f32) {
        self.coords.extend_from_slice(&position.to_array());
        self.values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_soup() {
        let mut polygon = PolygonObject::new(NormalType::Polygon);
        polygon.push_vertex(Vec3::ZERO);
        polygon.push_vertex(Vec3::X);
        polygon.push_vertex(Vec3::Y);
        polygon.push_normal(Vec3::Z);
        assert_eq!(polygon.number_of_triangles(), 1);
        assert_eq!(polygon.triangle(0), [Vec3::ZERO, Vec3::X, Vec3::Y]);
        assert!((polygon.area() - 0.5).abs() < 1e-6);
        assert_eq!(polygon.normal_vectors(), &[[0.0, 0.0, 1.0]]);
    }

    #[test]
    fn test_indexed_mesh() {
        let mut polygon = PolygonObject::new(NormalType::Vertex);
        for p in [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE] {
            polygon.push_vertex(p);
        }
        polygon.connections = vec![0, 1, 2, 2, 1, 3];
        assert_eq!(polygon.number_of_vertices(), 4);
        assert_eq!(polygon.number_of_triangles(), 2);
        assert_eq!(polygon.triangle_indices(1), [2, 1, 3]);
        assert_eq!(polygon.triangle(1)[2], Vec3::ONE);
    }

    #[test]
    fn test_empty() {
        let polygon = PolygonObject::default();
        assert!(polygon.is_empty());
        assert_eq!(polygon.area(), 0.0);
    }

    #[test]
    fn test_point_object() {
        let mut points = PointObject::default();
        assert!(points.is_empty());
        points.push(Vec3::new(1.0, 2.0, 3.0), 4.0);
        assert_eq!(points.number_of_points(), 1);
        assert_eq!(points.points(), &[[1.0, 2.0, 3.0]]);
        assert_eq!(points.values, vec![4.0]);
    }
}
