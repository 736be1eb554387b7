use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown or removed scene node: slot {index}, generation {generation}")]
    UnknownNode { index: u32, generation: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
