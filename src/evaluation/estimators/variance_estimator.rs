use crate::evaluation::estimators::Estimator;

/// Streaming population variance (Welford's update, divides by `n`).
#[derive(Debug, Default, Clone, Copy)]
pub struct VarianceEstimator {
    len: u64,
    mean: f64,
    m2: f64,
}

impl VarianceEstimator {
    /// Running mean maintained alongside the variance.
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.len > 0 { self.mean } else { f64::NAN }
    }
}

impl Estimator for VarianceEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        self.len += 1;
        let delta = v - self.mean;
        self.mean += delta / self.len as f64;
        self.m2 += delta * (v - self.mean);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.m2 / self.len as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> u64 {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    #[test]
    fn empty_is_nan() {
        let e = VarianceEstimator::default();
        assert!(e.estimation().is_nan());
        assert!(e.mean().is_nan());
    }

    #[test]
    fn single_value_has_zero_variance() {
        let mut e = VarianceEstimator::default();
        e.add(3.5);
        assert_eq!(e.estimation(), 0.0);
        assert_eq!(e.mean(), 3.5);
    }

    #[test]
    fn divides_by_n_not_n_minus_one() {
        let mut e = VarianceEstimator::default();
        for v in [1.0, 2.0, 3.0, 4.0] {
            e.add(v);
        }
        assert!((e.estimation() - 1.25).abs() < EPS);
        assert!((e.mean() - 2.5).abs() < EPS);
    }

    #[test]
    fn stable_with_large_offset() {
        let mut e = VarianceEstimator::default();
        for v in [1e9 + 4.0, 1e9 + 7.0, 1e9 + 13.0, 1e9 + 16.0] {
            e.add(v);
        }
        assert!((e.estimation() - 22.5).abs() < 1e-6);
    }
}
