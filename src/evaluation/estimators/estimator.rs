/// Online scalar estimator (e.g., streaming mean).
///
/// Implementations accept values incrementally via [`add`] and expose the
/// current estimate via [`estimation`].
///
/// [`add`]: Estimator::add
/// [`estimation`]: Estimator::estimation
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Returns the current estimate, `NaN` before the first observation.
    fn estimation(&self) -> f64;

    /// Number of observations seen so far.
    fn count(&self) -> u64;
}
