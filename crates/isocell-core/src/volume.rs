//! Unstructured volume object.
//!
//! An [`UnstructuredVolume`] stores its geometry as flat buffers, the layout shared
//! with file readers upstream and with the mappers downstream:
//!
//! - `coords`: three `f32` per node
//! - `values`: `veclen` `f32` per node
//! - `connections`: `CellType::num_nodes()` node indices per cell
//!
//! Every connection index is validated against the node count at construction, so the
//! mappers can index the buffers without further checks.

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{IsocellError, Result};

/// Cell topology of an unstructured volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    /// Linear tetrahedron (4 nodes)
    Tetrahedra,
    /// Quadratic tetrahedron (4 corner nodes + 6 mid-edge nodes)
    QuadraticTetrahedra,
    /// Trilinear hexahedron (8 nodes)
    Hexahedra,
    /// Pyramid with a quadrilateral base (5 nodes)
    Pyramid,
    /// Triangular prism (6 nodes)
    Prism,
}

impl CellType {
    /// Returns the number of nodes of one cell.
    pub const fn num_nodes(self) -> usize {
        match self {
            Self::Tetrahedra => 4,
            Self::Pyramid => 5,
            Self::Prism => 6,
            Self::Hexahedra => 8,
            Self::QuadraticTetrahedra => 10,
        }
    }

    /// Returns a human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tetrahedra => "tetrahedra",
            Self::QuadraticTetrahedra => "quadratic tetrahedra",
            Self::Hexahedra => "hexahedra",
            Self::Pyramid => "pyramid",
            Self::Prism => "prism",
        }
    }
}

/// A volume made of cells of a single type.
#[derive(Debug, Clone)]
pub struct UnstructuredVolume {
    cell_type: CellType,
    veclen: usize,
    coords: Vec<f32>,
    values: Vec<f32>,
    connections: Vec<u32>,
    min_value: f32,
    max_value: f32,
}

impl UnstructuredVolume {
    /// Creates a new volume, validating buffer sizes and connectivity.
    ///
    /// # Arguments
    /// * `cell_type` - The topology shared by every cell
    /// * `veclen` - Number of field components per node (1 for scalar fields)
    /// * `coords` - Node positions, 3 floats per node
    /// * `values` - Field samples, `veclen` floats per node
    /// * `connections` - Node indices, `cell_type.num_nodes()` per cell
    pub fn new(
        cell_type: CellType,
        veclen: usize,
        coords: Vec<f32>,
        values: Vec<f32>,
        connections: Vec<u32>,
    ) -> Result<Self> {
        if coords.len() % 3 != 0 {
            return Err(IsocellError::SizeMismatch {
                expected: coords.len() - coords.len() % 3,
                actual: coords.len(),
            });
        }
        if veclen == 0 {
            return Err(IsocellError::UnsupportedVeclen(0));
        }
        let num_nodes = coords.len() / 3;
        if values.len() != veclen * num_nodes {
            return Err(IsocellError::SizeMismatch {
                expected: veclen * num_nodes,
                actual: values.len(),
            });
        }
        let arity = cell_type.num_nodes();
        if connections.len() % arity != 0 {
            return Err(IsocellError::SizeMismatch {
                expected: connections.len() - connections.len() % arity,
                actual: connections.len(),
            });
        }
        if let Some(position) = connections
            .iter()
            .position(|&index| index as usize >= num_nodes)
        {
            return Err(IsocellError::InvalidConnection {
                cell: position / arity,
                index: connections[position],
                num_nodes,
            });
        }

        let (min_value, max_value) = values
            .iter()
            .step_by(veclen)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        debug!(
            "unstructured volume: {} {} cells, {num_nodes} nodes, veclen {veclen}, values in [{min_value}, {max_value}]",
            connections.len() / arity,
            cell_type.name()
        );
        Ok(Self {
            cell_type,
            veclen,
            coords,
            values,
            connections,
            min_value,
            max_value,
        })
    }

    /// Creates a scalar-field volume from node positions and cell arrays.
    pub fn from_cells<const N: usize>(
        cell_type: CellType,
        nodes: &[Vec3],
        values: Vec<f32>,
        cells: &[[u32; N]],
    ) -> Result<Self> {
        if N != cell_type.num_nodes() {
            return Err(IsocellError::SizeMismatch {
                expected: cell_type.num_nodes(),
                actual: N,
            });
        }
        let coords = nodes.iter().flat_map(|p| p.to_array()).collect();
        let connections = cells.iter().flatten().copied().collect();
        Self::new(cell_type, 1, coords, values, connections)
    }

    /// Returns the cell type.
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Returns the number of field components per node.
    pub fn veclen(&self) -> usize {
        self.veclen
    }

    /// Returns the number of nodes.
    pub fn number_of_nodes(&self) -> usize {
        self.coords.len() / 3
    }

    /// Returns the number of cells.
    pub fn number_of_cells(&self) -> usize {
        self.connections.len() / self.cell_type.num_nodes()
    }

    /// Returns the flat coordinate buffer.
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    /// Returns the node positions as `[x, y, z]` triples.
    pub fn node_coords(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.coords)
    }

    /// Returns the position of node `index`.
    #[inline]
    pub fn coord(&self, index: usize) -> Vec3 {
        Vec3::from_array(self.node_coords()[index])
    }

    /// Returns the flat value buffer.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the `veclen` components stored for node `index`.
    #[inline]
    pub fn node_value(&self, index: usize) -> &[f32] {
        &self.values[index * self.veclen..(index + 1) * self.veclen]
    }

    /// Returns the flat connectivity buffer.
    pub fn connections(&self) -> &[u32] {
        &self.connections
    }

    /// Returns the node indices of cell `index`.
    #[inline]
    pub fn cell_connection(&self, index: usize) -> &[u32] {
        let arity = self.cell_type.num_nodes();
        &self.connections[index * arity..(index + 1) * arity]
    }

    /// Returns the minimum of the first field component.
    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    /// Returns the maximum of the first field component.
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Returns the axis-aligned bounding box, or `None` for an empty volume.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let mut nodes = self.node_coords().iter().map(|&p| Vec3::from_array(p));
        let first = nodes.next()?;
        Some(nodes.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tet() -> UnstructuredVolume {
        UnstructuredVolume::from_cells(
            CellType::Tetrahedra,
            &[Vec3::X, Vec3::Y, Vec3::Z, Vec3::ZERO],
            vec![0.0, 1.0, 2.0, 3.0],
            &[[0, 1, 2, 3]],
        )
        .expect("valid volume")
    }

    #[test]
    fn test_counts() {
        let volume = unit_tet();
        assert_eq!(volume.number_of_nodes(), 4);
        assert_eq!(volume.number_of_cells(), 1);
        assert_eq!(volume.cell_connection(0), &[0, 1, 2, 3]);
        assert_eq!(volume.coord(2), Vec3::Z);
        assert_eq!(volume.node_coords()[0], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_min_max() {
        let volume = unit_tet();
        assert_eq!(volume.min_value(), 0.0);
        assert_eq!(volume.max_value(), 3.0);
    }

    #[test]
    fn test_bounding_box() {
        let (lo, hi) = unit_tet().bounding_box().expect("non-empty");
        assert_eq!(lo, Vec3::ZERO);
        assert_eq!(hi, Vec3::ONE);
    }

    #[test]
    fn test_invalid_connection() {
        let result = UnstructuredVolume::new(
            CellType::Tetrahedra,
            1,
            vec![0.0; 12],
            vec![0.0; 4],
            vec![0, 1, 2, 3, 0, 1, 2, 4],
        );
        assert!(matches!(
            result,
            Err(IsocellError::InvalidConnection {
                cell: 1,
                index: 4,
                num_nodes: 4
            })
        ));
    }

    #[test]
    fn test_value_size_mismatch() {
        let result = UnstructuredVolume::new(
            CellType::Tetrahedra,
            3,
            vec![0.0; 12],
            vec![0.0; 4],
            vec![0, 1, 2, 3],
        );
        assert!(matches!(
            result,
            Err(IsocellError::SizeMismatch {
                expected: 12,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_arity_mismatch() {
        let result = UnstructuredVolume::new(
            CellType::Hexahedra,
            1,
            vec![0.0; 12],
            vec![0.0; 4],
            vec![0, 1, 2, 3],
        );
        assert!(matches!(result, Err(IsocellError::SizeMismatch { .. })));
    }

    #[test]
    fn test_vector_field_node_value() {
        let volume = UnstructuredVolume::new(
            CellType::Tetrahedra,
            2,
            vec![0.0; 12],
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            vec![0, 1, 2, 3],
        )
        .expect("valid volume");
        assert_eq!(volume.node_value(2), &[4.0, 5.0]);
        // min/max track the first component
        assert_eq!(volume.min_value(), 0.0);
        assert_eq!(volume.max_value(), 6.0);
    }

    #[test]
    fn test_num_nodes() {
        assert_eq!(CellType::Tetrahedra.num_nodes(), 4);
        assert_eq!(CellType::Pyramid.num_nodes(), 5);
        assert_eq!(CellType::Prism.num_nodes(), 6);
        assert_eq!(CellType::Hexahedra.num_nodes(), 8);
        assert_eq!(CellType::QuadraticTetrahedra.num_nodes(), 10);
    }
}
