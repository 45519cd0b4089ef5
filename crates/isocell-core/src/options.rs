//! Configuration options for the mappers.

use serde::{Deserialize, Serialize};

use crate::error::{IsocellError, Result};

/// How normals are attached to extracted polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NormalType {
    /// One normal per triangle.
    #[default]
    Polygon,
    /// One normal per vertex, taken from the field gradient.
    Vertex,
}

/// Options for isosurface extraction on unstructured volumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsosurfaceOptions {
    /// The value defining the surface.
    pub isolevel: f32,

    /// Normal attachment mode.
    pub normal_type: NormalType,

    /// Emit three private vertices per triangle instead of sharing edge vertices.
    pub duplication: bool,

    /// Sweep cells on the rayon thread pool.
    pub parallel: bool,
}

impl Default for IsosurfaceOptions {
    fn default() -> Self {
        Self {
            isolevel: 0.0,
            normal_type: NormalType::Polygon,
            duplication: true,
            parallel: false,
        }
    }
}

impl IsosurfaceOptions {
    /// Creates options for the given isolevel, other fields at their defaults.
    pub fn with_isolevel(isolevel: f32) -> Self {
        Self {
            isolevel,
            ..Self::default()
        }
    }

    /// Checks that the option values are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.isolevel.is_finite() {
            return Err(IsocellError::InvalidOptions(format!(
                "isolevel must be finite, got {}",
                self.isolevel
            )));
        }
        Ok(())
    }

    /// Parses options from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Options for cell-by-cell particle sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingOptions {
    /// Expected number of particles per unit physical volume.
    pub density: f32,

    /// Seed of the particle generator.
    pub seed: u32,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            density: 1.0,
            seed: 0,
        }
    }
}

impl SamplingOptions {
    /// Checks that the option values are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || self.density < 0.0 {
            return Err(IsocellError::InvalidOptions(format!(
                "density must be finite and non-negative, got {}",
                self.density
            )));
        }
        Ok(())
    }

    /// Parses options from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
