use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("sample batch is empty: an estimate needs at least one draw")]
    EmptyBatch,

    #[error("sample size must be > 0")]
    ZeroSampleSize,

    #[error("sample size at position {index} must be > 0")]
    ZeroSampleSizeAt { index: usize },

    #[error("repetitions must be > 0")]
    ZeroRepetitions,
}
