//! Error types for the conversion layer.

use thiserror::Error;

use tensorbind_core::CoreError;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Irregular nested input: sibling sub-arrays disagree in shape.
    #[error("Shape mismatch at depth {depth}: sibling {index} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        depth: usize,
        index: usize,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// Flat sequence length does not match the product of the shape vector.
    #[error("Element count mismatch: {actual} elements for shape {shape:?} (expected {expected})")]
    ShapeElementCountMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// Exported buffer length does not match the product of the shape vector.
    #[error("Buffer/shape mismatch: buffer has {actual} elements, shape {shape:?} implies {expected}")]
    BufferShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure surfaced by the native engine, passed through unretried.
    #[error("Native engine error: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ConvertError {
    /// Wrap a native engine failure for pass-through.
    pub fn engine<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConvertError::Engine(Box::new(err))
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
