mod error;
mod experiments;

pub use error::BuildError;

pub use experiments::{build_experiment, parse_sample_sizes};
