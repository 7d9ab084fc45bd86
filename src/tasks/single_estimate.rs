use serde::Serialize;
use std::fmt::{Display, Formatter};

use crate::core::ArgumentError;
use crate::estimators::{GradientEstimator, ReparameterizedEstimator, ScoreFunctionEstimator};
use crate::sampling::NoiseSource;
use crate::utils::math::analytic_gradient;

/// One estimate from each estimator at a fixed sample size.
#[derive(Debug, Clone, Copy)]
pub struct SingleEstimate {
    theta: f64,
    sample_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimatePair {
    pub theta: f64,
    pub sample_size: usize,
    pub score: f64,
    pub reparameterized: f64,
    pub analytic: f64,
}

impl SingleEstimate {
    pub fn new(theta: f64, sample_size: usize) -> Result<Self, ArgumentError> {
        if sample_size == 0 {
            return Err(ArgumentError::ZeroSampleSize);
        }
        Ok(Self { theta, sample_size })
    }

    /// Draws a score-function batch, then a reparameterized batch, from `source`.
    pub fn run(&self, source: &mut dyn NoiseSource) -> Result<EstimatePair, ArgumentError> {
        let score = ScoreFunctionEstimator.draw_and_estimate(self.theta, self.sample_size, source)?;
        let reparameterized =
            ReparameterizedEstimator.draw_and_estimate(self.theta, self.sample_size, source)?;
        tracing::debug!(theta = self.theta, n = self.sample_size, score, reparameterized, "single estimate");

        Ok(EstimatePair {
            theta: self.theta,
            sample_size: self.sample_size,
            score,
            reparameterized,
            analytic: analytic_gradient(self.theta),
        })
    }
}

impl Display for EstimatePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "theta={}, n={}: score-function={:.6}, reparameterized={:.6}, exact={}",
            self.theta, self.sample_size, self.score, self.reparameterized, self.analytic
        )
    }
}
