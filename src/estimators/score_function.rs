use crate::core::{ArgumentError, SampleBatch};
use crate::estimators::GradientEstimator;

/// Log-derivative estimator.
///
/// Uses `∇θ E_q[f(x)] = E_q[f(x) ∇θ log q_θ(x)]`. For a unit-variance
/// Gaussian `∇θ log q_θ(x) = x − θ`, so with `f(x) = x²` the estimate is
/// `mean(x² (x − θ))` over draws `x ~ Normal(θ, 1)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreFunctionEstimator;

impl GradientEstimator for ScoreFunctionEstimator {
    fn name(&self) -> &'static str {
        "score-function"
    }

    #[inline]
    fn batch_from_noise(&self, theta: f64, noise: SampleBatch) -> SampleBatch {
        noise.map(|eps| theta + eps)
    }

    fn estimate(&self, theta: f64, batch: &SampleBatch) -> Result<f64, ArgumentError> {
        batch
            .mean_of(|x| x * x * (x - theta))
            .ok_or(ArgumentError::EmptyBatch)
    }
}
