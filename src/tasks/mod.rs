mod experiment;
mod single_estimate;
mod variance_sweep;

pub use experiment::{Experiment, ExperimentOutput};
pub use single_estimate::{EstimatePair, SingleEstimate};
pub use variance_sweep::{NoiseSharing, SweepConfig, SweepReport, VarianceSweep};
