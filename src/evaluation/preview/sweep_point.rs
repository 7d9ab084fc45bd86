use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

use crate::evaluation::SummaryStatistic;

/// Both estimators' summaries at one sample size.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    pub sample_size: usize,
    pub score: SummaryStatistic,
    pub reparameterized: SummaryStatistic,
}

impl SweepPoint {
    /// `score.variance / reparameterized.variance`.
    pub fn variance_ratio(&self) -> f64 {
        self.score.variance / self.reparameterized.variance
    }
}

impl Display for SweepPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "n={}, score[{}], reparam[{}]",
            self.sample_size, self.score, self.reparameterized
        )
    }
}
