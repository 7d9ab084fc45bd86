use std::ops::Index;

/// Ordered batch of independent draws with a fixed length.
///
/// A batch is created for a single estimator invocation and dropped once the
/// estimate has been computed. Element-wise work is expressed through
/// [`map`](SampleBatch::map) and the reductions below rather than operator
/// overloading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBatch {
    values: Vec<f64>,
}

impl SampleBatch {
    #[inline]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Applies `f` to every draw, keeping order and length.
    pub fn map<F: FnMut(f64) -> f64>(mut self, mut f: F) -> Self {
        for v in self.values.iter_mut() {
            *v = f(*v);
        }
        self
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Arithmetic mean, or `None` for an empty batch.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.sum() / self.values.len() as f64)
        }
    }

    /// Mean of `f` applied to each draw, or `None` for an empty batch.
    pub fn mean_of<F: Fn(f64) -> f64>(&self, f: F) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let total: f64 = self.values.iter().map(|&v| f(v)).sum();
        Some(total / self.values.len() as f64)
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for SampleBatch {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl Index<usize> for SampleBatch {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_has_no_mean() {
        let b = SampleBatch::default();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert!(b.mean().is_none());
        assert!(b.mean_of(|x| x * x).is_none());
        assert_eq!(b.sum(), 0.0);
    }

    #[test]
    fn map_preserves_order_and_length() {
        let b = SampleBatch::from(vec![-1.0, 0.0, 2.5]).map(|x| x + 2.0);
        assert_eq!(b.as_slice(), &[1.0, 2.0, 4.5]);
        assert_eq!(b[2], 4.5);
    }

    #[test]
    fn reductions_match_hand_computation() {
        let b = SampleBatch::new(vec![1.0, 2.0, 3.0, 6.0]);
        assert_eq!(b.sum(), 12.0);
        assert_eq!(b.mean(), Some(3.0));
        assert_eq!(b.mean_of(|x| x * x), Some(12.5));
    }

    #[test]
    fn nan_propagates_through_reductions() {
        let b = SampleBatch::new(vec![1.0, f64::NAN]);
        assert!(b.mean().unwrap().is_nan());
    }
}
