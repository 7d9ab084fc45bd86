mod sweep_point;
mod variance_curve;

pub use sweep_point::SweepPoint;
pub use variance_curve::VarianceCurve;
