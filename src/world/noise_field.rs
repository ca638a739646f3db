//! Deterministic 2D coherent noise used to lay out biomes.

use noise::{NoiseFn, Simplex};

/// Simplex noise over the plane. Same seed and input always give the
/// same value; nearby inputs give nearby values.
#[derive(Debug, Clone)]
pub struct NoiseField {
    seed: u32,
    simplex: Simplex,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            simplex: Simplex::new(seed),
        }
    }

    /// A fresh field from OS entropy, for runs without a configured seed.
    pub fn random() -> Self {
        Self::new(rand::random::<u32>())
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field. Always within [-1, 1].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y]).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stays_in_range() {
        let field = NoiseField::new(7);
        for gx in 0..200 {
            for gy in 0..50 {
                let v = field.sample(gx as f64 * 0.1, gy as f64 * 0.37 - 3.0);
                assert!((-1.0..=1.0).contains(&v), "sample {} out of range", v);
            }
        }
    }

    #[test]
    fn test_sample_is_deterministic() {
        let a = NoiseField::new(1234);
        let b = NoiseField::new(1234);
        for i in 0..100 {
            let (x, y) = (i as f64 * 0.31, i as f64 * -0.17);
            assert_eq!(a.sample(x, y), a.sample(x, y));
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn test_sample_is_continuous() {
        let field = NoiseField::new(99);
        for i in 0..100 {
            let x = i as f64 * 0.53;
            let y = i as f64 * 0.29;
            let delta = (field.sample(x, y) - field.sample(x + 1e-4, y + 1e-4)).abs();
            assert!(delta < 0.01, "jump of {} at ({}, {})", delta, x, y);
        }
    }

    #[test]
    fn test_seeds_produce_different_fields() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let differs = (0..64).any(|i| {
            let (x, y) = (i as f64 * 0.7 + 0.3, i as f64 * 0.4 + 0.1);
            a.sample(x, y) != b.sample(x, y)
        });
        assert!(differs);
    }
}
