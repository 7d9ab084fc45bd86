use crate::core::{ArgumentError, SampleBatch};
use crate::sampling::NoiseSource;

/// Monte Carlo estimator of `d/dθ E[x²]` for `x ~ Normal(θ, 1)`.
///
/// Estimators never touch a random generator directly. Callers hand them
/// standard-normal noise, which [`batch_from_noise`] maps onto the batch the
/// estimator expects, and [`estimate`] reduces that batch to a scalar.
///
/// [`batch_from_noise`]: GradientEstimator::batch_from_noise
/// [`estimate`]: GradientEstimator::estimate
pub trait GradientEstimator {
    /// Stable identifier, e.g. `"score-function"`.
    fn name(&self) -> &'static str;

    /// Maps Normal(0, 1) noise onto the distribution this estimator samples from.
    fn batch_from_noise(&self, theta: f64, noise: SampleBatch) -> SampleBatch;

    /// Reduces a batch to a single gradient estimate.
    ///
    /// Fails with [`ArgumentError::EmptyBatch`] when `batch` is empty.
    fn estimate(&self, theta: f64, batch: &SampleBatch) -> Result<f64, ArgumentError>;

    /// Draws `n` fresh values from `source` and estimates from them.
    fn draw_and_estimate(
        &self,
        theta: f64,
        n: usize,
        source: &mut dyn NoiseSource,
    ) -> Result<f64, ArgumentError> {
        let batch = self.batch_from_noise(theta, source.standard_normal(n));
        self.estimate(theta, &batch)
    }
}
