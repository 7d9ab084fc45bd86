use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

use crate::evaluation::{BasicEstimator, Estimator, VarianceEstimator};

/// Mean and population variance of an [`EstimateSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistic {
    pub mean: f64,
    pub variance: f64,
}

impl Display for SummaryStatistic {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "mean={:.6}, var={:.6e}", self.mean, self.variance)
    }
}

/// Per-repetition gradient estimates for one (estimator, sample size) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateSeries {
    estimates: Vec<f64>,
}

impl EstimateSeries {
    pub fn with_capacity(repetitions: usize) -> Self {
        Self {
            estimates: Vec::with_capacity(repetitions),
        }
    }

    #[inline]
    pub fn push(&mut self, estimate: f64) {
        self.estimates.push(estimate);
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.estimates
    }

    /// Reduces the series to (mean, population variance).
    ///
    /// An empty series summarizes to `NaN` for both fields.
    pub fn summarize(&self) -> SummaryStatistic {
        let mut mean = BasicEstimator::default();
        let mut variance = VarianceEstimator::default();
        for &g in &self.estimates {
            mean.add(g);
            variance.add(g);
        }
        SummaryStatistic {
            mean: mean.estimation(),
            variance: variance.estimation(),
        }
    }
}

impl FromIterator<f64> for EstimateSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            estimates: iter.into_iter().collect(),
        }
    }
}
