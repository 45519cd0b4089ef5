//! Cell-by-cell uniform particle sampling.
//!
//! Each cell receives `density * volume` particles in expectation: the integer part is
//! always generated and the fractional part decides one extra particle by a single
//! Bernoulli draw. Particles are uniform in local coordinates of their cell.

use isocell_core::{
    IsocellError, PointObject, Result, SamplingOptions, UnstructuredVolume, Xorshift128,
};
use log::debug;
use rand::{Rng, RngCore};

use crate::cell::Cell;

/// Generates particles over an unstructured volume.
#[derive(Debug, Clone, Default)]
pub struct CellByCellSampling {
    options: SamplingOptions,
}

impl CellByCellSampling {
    /// Creates a sampler with the given options.
    pub fn new(options: SamplingOptions) -> Self {
        Self { options }
    }

    /// Returns the sampling options.
    pub fn options(&self) -> &SamplingOptions {
        &self.options
    }

    /// Samples `volume` with a [`Xorshift128`] seeded from the options.
    pub fn sample(&self, volume: &UnstructuredVolume) -> Result<PointObject> {
        let mut rng = Xorshift128::new(self.options.seed);
        self.sample_with(volume, &mut rng)
    }

    /// Samples `volume` drawing from `rng`.
    pub fn sample_with(
        &self,
        volume: &UnstructuredVolume,
        rng: &mut dyn RngCore,
    ) -> Result<PointObject> {
        self.options.validate()?;
        if volume.veclen() != 1 {
            return Err(IsocellError::UnsupportedVeclen(volume.veclen()));
        }

        let mut points = PointObject::default();
        let mut cell = Cell::new(volume);
        let mut total_volume = 0.0_f64;
        for index in 0..volume.number_of_cells() {
            cell.bind(index)?;
            let cell_volume = cell.volume();
            total_volume += f64::from(cell_volume);

            let expected = self.options.density * cell_volume;
            let whole = expected.floor();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let mut count = whole as usize;
            if rng.gen::<f32>() < expected - whole {
                count += 1;
            }
            for _ in 0..count {
                let position = cell.random_sampling(rng);
                points.push(position, cell.scalar());
            }
        }

        debug!(
            "sampled {} particles over {} cells (volume {total_volume:.4}, density {})",
            points.number_of_points(),
            volume.number_of_cells(),
            self.options.density
        );
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isosurface::tests::{hex_grid, tet_grid};
    use glam::Vec3;
    use isocell_core::CellType;

    fn options(density: f32, seed: u32) -> SamplingOptions {
        SamplingOptions { density, seed }
    }

    #[test]
    fn test_expected_particle_count() {
        // 64 cells of volume 1/64, 15.625 particles each
        let volume = hex_grid(5, |p| p.x);
        let points = CellByCellSampling::new(options(1000.0, 3))
            .sample(&volume)
            .expect("sampling failed");
        let n = points.number_of_points();
        assert!((960..=1024).contains(&n), "{n} particles");
        assert_eq!(points.values.len(), n);
    }

    #[test]
    fn test_particles_carry_interpolated_values() {
        let field = |p: Vec3| p.x + 2.0 * p.y - p.z;
        let volume = tet_grid(4, field);
        let points = CellByCellSampling::new(options(500.0, 11))
            .sample(&volume)
            .expect("sampling failed");
        assert!(!points.is_empty());
        for (p, v) in points.points().iter().zip(&points.values) {
            let p = Vec3::from_array(*p);
            assert!(p.cmpge(Vec3::splat(-1e-5)).all() && p.cmple(Vec3::splat(1.0 + 1e-5)).all());
            assert!((field(p) - v).abs() < 1e-4, "value {v} at {p:?}");
        }
    }

    #[test]
    fn test_particle_count_follows_cell_volume() {
        // The second tetrahedron is eight times larger than the first
        let volume = UnstructuredVolume::from_cells(
            CellType::Tetrahedra,
            &[
                Vec3::X,
                Vec3::Y,
                Vec3::Z,
                Vec3::ZERO,
                Vec3::new(12.0, 10.0, 10.0),
                Vec3::new(10.0, 12.0, 10.0),
                Vec3::new(10.0, 10.0, 12.0),
                Vec3::splat(10.0),
            ],
            vec![0.0; 8],
            &[[0, 1, 2, 3], [4, 5, 6, 7]],
        )
        .expect("valid volume");
        let points = CellByCellSampling::new(options(600.0, 1))
            .sample(&volume)
            .expect("sampling failed");
        let small = points.points().iter().filter(|p| p[0] < 5.0).count();
        let large = points.number_of_points() - small;
        assert!((99..=101).contains(&small), "{small} particles in the small cell");
        assert!((799..=801).contains(&large), "{large} particles in the large cell");
    }

    #[test]
    fn test_seed_reproducibility() {
        let volume = hex_grid(3, |p| p.y);
        let a = CellByCellSampling::new(options(50.0, 7))
            .sample(&volume)
            .expect("sampling failed");
        let b = CellByCellSampling::new(options(50.0, 7))
            .sample(&volume)
            .expect("sampling failed");
        let c = CellByCellSampling::new(options(50.0, 8))
            .sample(&volume)
            .expect("sampling failed");
        assert_eq!(a.coords, b.coords);
        assert_ne!(a.coords, c.coords);
    }

    #[test]
    fn test_injected_generator() {
        let volume = hex_grid(3, |p| p.y);
        let sampler = CellByCellSampling::new(options(50.0, 7));
        let mut rng = Xorshift128::new(7);
        let injected = sampler
            .sample_with(&volume, &mut rng)
            .expect("sampling failed");
        let seeded = sampler.sample(&volume).expect("sampling failed");
        assert_eq!(injected.coords, seeded.coords);
    }

    #[test]
    fn test_zero_density() {
        let volume = hex_grid(3, |p| p.y);
        let points = CellByCellSampling::new(options(0.0, 0))
            .sample(&volume)
            .expect("sampling failed");
        assert!(points.is_empty());
    }

    #[test]
    fn test_negative_density_is_rejected() {
        let volume = hex_grid(2, |p| p.y);
        let result = CellByCellSampling::new(options(-1.0, 0)).sample(&volume);
        assert!(matches!(result, Err(IsocellError::InvalidOptions(_))));
    }
}
