mod gradient_estimator;
mod reparameterized;
mod score_function;

pub use gradient_estimator::GradientEstimator;
pub use reparameterized::ReparameterizedEstimator;
pub use score_function::ScoreFunctionEstimator;
