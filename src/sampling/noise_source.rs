use crate::core::SampleBatch;

/// Pull-based source of standard-normal noise.
///
/// Every estimator draws its batches through a `NoiseSource` that is passed
/// in explicitly, so a run is fully determined by the source's seed.
pub trait NoiseSource {
    /// Returns `n` independent draws from Normal(0, 1).
    ///
    /// `n == 0` yields an empty batch.
    fn standard_normal(&mut self, n: usize) -> SampleBatch;

    /// Total number of values produced since construction or the last
    /// [`restart`](NoiseSource::restart).
    fn draws(&self) -> u64;

    /// Rewinds the source so the following draws repeat from the start.
    fn restart(&mut self);
}
