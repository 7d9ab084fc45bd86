mod estimators;
mod preview;
mod summary;

pub use estimators::{BasicEstimator, Estimator, VarianceEstimator};
pub use preview::{SweepPoint, VarianceCurve};
pub use summary::{EstimateSeries, SummaryStatistic};
