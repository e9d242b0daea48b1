use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use super::{ParamGen, Result};

/// A parameter generator that follows a certain probabilistic distribution.
pub struct RandParamGen<R: Rng, D: Distribution<f32>> {
    rng: R,
    distribution: D,
    remaining: usize,
}

impl<R: Rng, D: Distribution<f32>> RandParamGen<R, D> {
    /// Creates a new `RandParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `distribution` - The distribution to sample the random numbers from.
    /// * `limit` - The maximum amount of numbers to generate.
    pub fn new(rng: R, distribution: D, limit: usize) -> Self {
        Self {
            rng,
            distribution,
            remaining: limit,
        }
    }
}

impl<R: Rng> RandParamGen<R, Normal<f32>> {
    /// Creates a new `RandParamGen` parameter generator with a normal distribution.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `limit` - The maximum amount of numbers to generate.
    /// * `mean` - The mean of the distribution.
    /// * `std_dev` - The standard deviation of the distribution.
    ///
    /// # Returns
    /// An error if `std_dev` is not finite (Nan or infinite).
    pub fn normal(rng: R, limit: usize, mean: f32, std_dev: f32) -> Result<Self> {
        Ok(Self::new(rng, Normal::new(mean, std_dev)?, limit))
    }
}

impl RandParamGen<StdRng, Normal<f32>> {
    /// Creates a reproducible normal parameter generator backed by a `StdRng` seeded with `seed`.
    ///
    /// Two generators built with the same arguments yield the same sequence.
    pub fn seeded_normal(seed: u64, limit: usize, mean: f32, std_dev: f32) -> Result<Self> {
        Self::normal(StdRng::seed_from_u64(seed), limit, mean, std_dev)
    }
}

impl<R: Rng, D: Distribution<f32>> ParamGen for RandParamGen<R, D> {
    fn sample(&mut self, mut n: usize) -> Option<Vec<f32>> {
        if self.remaining == 0 {
            return None;
        }

        n = n.min(self.remaining);
        self.remaining -= n;

        let sample = (0..n)
            .map(|_| self.distribution.sample(&mut self.rng))
            .collect();

        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let mut param_gen = RandParamGen::seeded_normal(42, 0, 0., 1.).unwrap();
        assert!(param_gen.sample(1).is_none());
    }

    #[test]
    fn partial() {
        let mut param_gen = RandParamGen::seeded_normal(42, 10, 0., 1.).unwrap();

        let sample = param_gen.sample(7).unwrap();
        assert_eq!(sample.len(), 7);

        let sample = param_gen.sample(7).unwrap();
        assert_eq!(sample.len(), 3);

        assert!(param_gen.sample(1).is_none());
    }

    #[test]
    fn same_seed_same_sample() {
        let mut a = RandParamGen::seeded_normal(1, 5, 0., 0.01).unwrap();
        let mut b = RandParamGen::seeded_normal(1, 5, 0., 0.01).unwrap();

        assert_eq!(a.sample(5), b.sample(5));
    }

    #[test]
    fn small_std_dev_stays_close_to_mean() {
        let mut param_gen = RandParamGen::seeded_normal(7, 1000, 0., 0.01).unwrap();
        let sample = param_gen.sample(1000).unwrap();

        assert!(sample.iter().all(|w| w.abs() < 0.1));
    }

    #[test]
    fn rejects_non_finite_std_dev() {
        assert!(RandParamGen::seeded_normal(1, 1, 0., f32::NAN).is_err());
    }
}
