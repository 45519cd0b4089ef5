//! Xorshift128 pseudo-random number generator.
//!
//! A small, fast generator with 128 bits of state (Marsaglia, 2003). It implements
//! [`rand::RngCore`] and [`rand::SeedableRng`], so it can be passed anywhere the mappers
//! accept an injected generator and combined with the [`rand::Rng`] extension methods.
//!
//! `rng.gen::<f32>()` on this generator yields the same 24-bit uniform floats as
//! [`Xorshift128::rand`].

use rand::{RngCore, SeedableRng};

/// Scale that maps a 24-bit integer to `[0, 1)`.
const T24: f32 = 1.0 / 16_777_216.0;

/// Xorshift128 generator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl Xorshift128 {
    /// Creates a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            x: 0,
            y: 0,
            z: 0,
            w: 0,
        };
        rng.set_seed(seed);
        rng
    }

    /// Re-seeds the generator.
    ///
    /// The four state words are filled by the Knuth multiplicative recurrence
    /// `s = 1812433253 * (s ^ (s >> 30)) + k` for `k = 1..=4`.
    pub fn set_seed(&mut self, seed: u32) {
        let mut s = seed;
        let mut next = |k: u32| {
            s = 1_812_433_253_u32
                .wrapping_mul(s ^ (s >> 30))
                .wrapping_add(k);
            s
        };
        self.x = next(1);
        self.y = next(2);
        self.z = next(3);
        self.w = next(4);
    }

    /// Returns the next 32-bit integer.
    #[inline]
    pub fn rand_integer(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = (self.w ^ (self.w >> 19)) ^ (t ^ (t >> 8));
        self.w
    }

    /// Returns a uniform float in `[0, 1)`.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn rand(&mut self) -> f32 {
        T24 * (self.rand_integer() >> 8) as f32
    }
}

impl Default for Xorshift128 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RngCore for Xorshift128 {
    fn next_u32(&mut self) -> u32 {
        self.rand_integer()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.rand_integer());
        let hi = u64::from(self.rand_integer());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.rand_integer().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xorshift128 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::Rng;

    #[test]
    fn test_deterministic() {
        let mut a = Xorshift128::new(42);
        let mut b = Xorshift128::new(42);
        for _ in 0..100 {
            assert_eq!(a.rand_integer(), b.rand_integer());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Xorshift128::new(1);
        let mut b = Xorshift128::new(2);
        let same = (0..16).filter(|_| a.rand_integer() == b.rand_integer()).count();
        assert!(same < 16);
    }

    #[test]
    fn test_seeding_recurrence() {
        let rng = Xorshift128::new(0);
        // s = 1812433253 * (0 ^ 0) + 1
        assert_eq!(rng.x, 1);
        let expected_y = 1_812_433_253_u32.wrapping_mul(1 ^ (1 >> 30)).wrapping_add(2);
        assert_eq!(rng.y, expected_y);
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = Xorshift128::new(7);
        for _ in 0..10_000 {
            let r = rng.rand();
            assert!((0.0..1.0).contains(&r), "{r} outside [0, 1)");
        }
    }

    #[test]
    fn test_gen_matches_rand() {
        let mut a = Xorshift128::new(99);
        let mut b = Xorshift128::new(99);
        for _ in 0..100 {
            let x: f32 = a.gen();
            assert_eq!(x, b.rand());
        }
    }

    #[test]
    fn test_mean_is_near_half() {
        let mut rng = Xorshift128::new(3);
        let n = 100_000;
        let sum: f64 = (0..n).map(|_| f64::from(rng.rand())).sum();
        let mean = sum / f64::from(n);
        assert!((mean - 0.5).abs() < 0.01, "mean {mean}");
    }

    #[test]
    fn test_from_seed() {
        let mut a = Xorshift128::from_seed(5_u32.to_le_bytes());
        let mut b = Xorshift128::new(5);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = Xorshift128::new(11);
        let mut buf = [0_u8; 7];
        rng.fill_bytes(&mut buf);
        let mut check = Xorshift128::new(11);
        let first = check.next_u32().to_le_bytes();
        assert_eq!(&buf[..4], &first);
    }

    proptest! {
        #[test]
        fn prop_rand_in_unit_interval(seed in any::<u32>()) {
            let mut rng = Xorshift128::new(seed);
            for _ in 0..256 {
                let r = rng.rand();
                prop_assert!((0.0..1.0).contains(&r));
            }
        }

        #[test]
        fn prop_state_never_all_zero(seed in any::<u32>()) {
            let rng = Xorshift128::new(seed);
            prop_assert!(rng.x | rng.y | rng.z | rng.w != 0);
        }
    }
}
