use crate::core::{ArgumentError, SampleBatch};
use crate::estimators::GradientEstimator;

/// Reparameterization-trick estimator.
///
/// Writes `x = θ + ε` with `ε ~ Normal(0, 1)`, so the expectation no longer
/// depends on θ through the distribution and `∇θ E[(θ + ε)²] = E[2(θ + ε)]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReparameterizedEstimator;

impl GradientEstimator for ReparameterizedEstimator {
    fn name(&self) -> &'static str {
        "reparameterized"
    }

    #[inline]
    fn batch_from_noise(&self, _theta: f64, noise: SampleBatch) -> SampleBatch {
        noise
    }

    fn estimate(&self, theta: f64, batch: &SampleBatch) -> Result<f64, ArgumentError> {
        batch
            .mean_of(|eps| 2.0 * (theta + eps))
            .ok_or(ArgumentError::EmptyBatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::GaussianNoise;

    #[test]
    fn matches_hand_computed_value() {
        // (2·(2−1) + 2·(2+1)) / 2 = 4
        let g = ReparameterizedEstimator
            .estimate(2.0, &SampleBatch::from(vec![-1.0, 1.0]))
            .unwrap();
        assert_eq!(g, 4.0);
    }

    #[test]
    fn noise_is_used_as_is() {
        let noise = SampleBatch::from(vec![0.25, -3.0]);
        let b = ReparameterizedEstimator.batch_from_noise(5.0, noise.clone());
        assert_eq!(b, noise);
    }

    #[test]
    fn has_stable_name() {
        assert_eq!(ReparameterizedEstimator.name(), "reparameterized");
    }

    #[test]
    fn empty_batch_is_rejected() {
        let err = ReparameterizedEstimator
            .estimate(2.0, &SampleBatch::default())
            .unwrap_err();
        assert_eq!(err, ArgumentError::EmptyBatch);
    }

    #[test]
    fn zero_draws_through_source_is_rejected() {
        let mut noise = GaussianNoise::new(1);
        let err = ReparameterizedEstimator
            .draw_and_estimate(2.0, 0, &mut noise)
            .unwrap_err();
        assert_eq!(err, ArgumentError::EmptyBatch);
    }

    #[test]
    fn single_draw_at_n_1000_is_near_gradient() {
        let mut noise = GaussianNoise::new(42);
        let g = ReparameterizedEstimator
            .draw_and_estimate(2.0, 1000, &mut noise)
            .unwrap();
        assert!((g - 4.0).abs() < 1.0, "g={g}");
    }
}
