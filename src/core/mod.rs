mod error;
mod sample_batch;

pub use error::ArgumentError;
pub use sample_batch::SampleBatch;
