use crate::evaluation::estimators::Estimator;

/// Streaming mean estimator: `mean = sum / len`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: u64,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> u64 {
        self.len
    }
}
