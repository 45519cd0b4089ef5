//! Uniform structured volume object.

use glam::{UVec3, Vec3};

use crate::error::{IsocellError, Result};

/// A scalar field sampled on a uniform grid.
///
/// Values are stored x-fastest: node `(x, y, z)` lives at `x + nx * (y + ny * z)`.
#[derive(Debug, Clone)]
pub struct StructuredVolume {
    resolution: UVec3,
    origin: Vec3,
    spacing: Vec3,
    values: Vec<f32>,
}

impl StructuredVolume {
    /// Creates a new grid volume.
    ///
    /// # Arguments
    /// * `resolution` - Number of nodes along each axis (at least 2)
    /// * `origin` - World position of node `(0, 0, 0)`
    /// * `spacing` - Distance between neighboring nodes along each axis
    /// * `values` - One scalar per node
    pub fn new(resolution: UVec3, origin: Vec3, spacing: Vec3, values: Vec<f32>) -> Result<Self> {
        if resolution.min_element() < 2 {
            return Err(IsocellError::InvalidResolution);
        }
        let expected =
            resolution.x as usize * resolution.y as usize * resolution.z as usize;
        if values.len() != expected {
            return Err(IsocellError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            resolution,
            origin,
            spacing,
            values,
        })
    }

    /// Samples `f` at every node of the grid.
    pub fn from_fn(
        resolution: UVec3,
        origin: Vec3,
        spacing: Vec3,
        mut f: impl FnMut(Vec3) -> f32,
    ) -> Result<Self> {
        let mut values = Vec::with_capacity(
            resolution.x as usize * resolution.y as usize * resolution.z as usize,
        );
        for z in 0..resolution.z {
            for y in 0..resolution.y {
                for x in 0..resolution.x {
                    values.push(f(origin + spacing * UVec3::new(x, y, z).as_vec3()));
                }
            }
        }
        Self::new(resolution, origin, spacing, values)
    }

    /// Returns the number of nodes along each axis.
    pub fn resolution(&self) -> UVec3 {
        self.resolution
    }

    /// Returns the number of grid cells.
    pub fn number_of_cells(&self) -> usize {
        let cells = self.resolution - UVec3::ONE;
        cells.x as usize * cells.y as usize * cells.z as usize
    }

    /// Returns the world position of node `(0, 0, 0)`.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Returns the node spacing.
    pub fn spacing(&self) -> Vec3 {
        self.spacing
    }

    /// Returns the flat value buffer.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Flattens a node coordinate into a value index.
    #[inline]
    pub fn index(&self, x: u32, y: u32, z: u32) -> usize {
        let r = self.resolution;
        x as usize + r.x as usize * (y as usize + r.y as usize * z as usize)
    }

    /// Returns the value at node `(x, y, z)`.
    #[inline]
    pub fn value(&self, x: u32, y: u32, z: u32) -> f32 {
        self.values[self.index(x, y, z)]
    }

    /// Maps a (possibly fractional) grid coordinate to world space.
    #[inline]
    pub fn position(&self, grid: Vec3) -> Vec3 {
        self.origin + self.spacing * grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout() {
        let volume = StructuredVolume::from_fn(UVec3::new(3, 4, 5), Vec3::ZERO, Vec3::ONE, |p| {
            p.x + 10.0 * p.y + 100.0 * p.z
        })
        .expect("valid grid");
        assert_eq!(volume.index(1, 0, 0), 1);
        assert_eq!(volume.index(0, 1, 0), 3);
        assert_eq!(volume.index(0, 0, 1), 12);
        assert_eq!(volume.value(2, 3, 4), 432.0);
        assert_eq!(volume.number_of_cells(), 2 * 3 * 4);
    }

    #[test]
    fn test_position() {
        let volume = StructuredVolume::new(
            UVec3::splat(2),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::splat(0.5),
            vec![0.0; 8],
        )
        .expect("valid grid");
        assert_eq!(
            volume.position(Vec3::new(1.0, 0.5, 0.0)),
            Vec3::new(1.5, 2.25, 3.0)
        );
    }

    #[test]
    fn test_resolution_too_small() {
        let result = StructuredVolume::new(UVec3::new(1, 2, 2), Vec3::ZERO, Vec3::ONE, vec![0.0; 4]);
        assert!(matches!(result, Err(IsocellError::InvalidResolution)));
    }

    #[test]
    fn test_wrong_value_count() {
        let result = StructuredVolume::new(UVec3::splat(3), Vec3::ZERO, Vec3::ONE, vec![0.0; 10]);
        assert!(matches!(
            result,
            Err(IsocellError::SizeMismatch {
                expected: 27,
                actual: 10
            })
        ));
    }
}
