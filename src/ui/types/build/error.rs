use thiserror::Error;

use crate::core::ArgumentError;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}
