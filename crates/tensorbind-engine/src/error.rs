//! Error types for engine capabilities.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Element count mismatch: buffer has {actual} elements, shape {shape:?} implies {expected}")]
    ElementCountMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("Index {index} out of range for dimension {dim} with size {size}")]
    IndexOutOfRange {
        dim: usize,
        index: usize,
        size: usize,
    },

    #[error("Unsupported dimension {dim} for tensor of rank {rank}")]
    UnsupportedDim { dim: usize, rank: usize },

    #[error("Invalid tensor handle {0}")]
    InvalidHandle(usize),

    #[error("Native engine error: {0}")]
    Native(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
