use crate::core::SampleBatch;
use crate::sampling::NoiseSource;

/// Noise source that cycles through a fixed list of values.
pub struct FixedNoise {
    values: Vec<f64>,
    idx: usize,
    draws: u64,
}

impl FixedNoise {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "FixedNoise needs at least one value");
        Self {
            values,
            idx: 0,
            draws: 0,
        }
    }
}

impl NoiseSource for FixedNoise {
    fn standard_normal(&mut self, n: usize) -> SampleBatch {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.values[self.idx]);
            self.idx = (self.idx + 1) % self.values.len();
        }
        self.draws += n as u64;
        SampleBatch::new(out)
    }

    fn draws(&self) -> u64 {
        self.draws
    }

    fn restart(&mut self) {
        self.idx = 0;
        self.draws = 0;
    }
}
