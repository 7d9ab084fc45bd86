use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use crate::core::SampleBatch;
use crate::sampling::NoiseSource;

/// Seeded standard-normal sampler backed by [`StdRng`].
#[derive(Debug)]
pub struct GaussianNoise {
    seed: u64,
    rng: StdRng,
    draws: u64,
}

impl GaussianNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    fn draw(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}

impl NoiseSource for GaussianNoise {
    fn standard_normal(&mut self, n: usize) -> SampleBatch {
        let values: Vec<f64> = (0..n).map(|_| self.draw()).collect();
        self.draws += n as u64;
        SampleBatch::new(values)
    }

    fn draws(&self) -> u64 {
        self.draws
    }

    fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.draws = 0;
    }
}
