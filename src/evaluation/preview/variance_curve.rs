use serde::Serialize;

use crate::evaluation::SweepPoint;

/// Sweep results ordered by sample size, in the order they were measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VarianceCurve {
    entries: Vec<SweepPoint>,
}

impl VarianceCurve {
    pub fn push(&mut self, point: SweepPoint) {
        self.entries.push(point)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<SweepPoint> {
        self.entries.last().copied()
    }

    pub fn points(&self) -> &[SweepPoint] {
        &self.entries
    }

    pub fn sample_sizes(&self) -> Vec<usize> {
        self.entries.iter().map(|p| p.sample_size).collect()
    }

    pub fn score_means(&self) -> Vec<f64> {
        self.entries.iter().map(|p| p.score.mean).collect()
    }

    pub fn reparameterized_means(&self) -> Vec<f64> {
        self.entries.iter().map(|p| p.reparameterized.mean).collect()
    }

    pub fn score_variances(&self) -> Vec<f64> {
        self.entries.iter().map(|p| p.score.variance).collect()
    }

    pub fn reparameterized_variances(&self) -> Vec<f64> {
        self.entries
            .iter()
            .map(|p| p.reparameterized.variance)
            .collect()
    }
}
