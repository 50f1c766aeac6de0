//! Reconstruction of nested arrays from exported buffers.

use tensorbind_core::{shape, NestedArray, Scalar, TypedBuffer};

use crate::error::{ConvertError, ConvertResult};

/// Rebuild the nested-array form of a row-major buffer.
///
/// Inverse of flattening: re-flattening the result reproduces the same flat
/// order and shape. A rank-0 shape produces an empty result without error;
/// shapes containing a zero dimension produce the corresponding empty
/// nesting. Fails with [`ConvertError::BufferShapeMismatch`] when the buffer
/// length disagrees with the shape's product.
pub fn materialize(buffer: &TypedBuffer, buffer_shape: &[usize]) -> ConvertResult<NestedArray> {
    if buffer_shape.is_empty() {
        return Ok(NestedArray::Scalars(vec![]));
    }
    let expected = shape::numel(buffer_shape);
    if buffer.len() != expected {
        return Err(ConvertError::BufferShapeMismatch {
            shape: buffer_shape.to_vec(),
            expected,
            actual: buffer.len(),
        });
    }
    Ok(split_scalars(&buffer.to_scalars(), buffer_shape))
}

/// Split a flat scalar run along the leading dimension, recursing into the
/// trailing shape. Every level is sized directly from the shape vector, so
/// each leaf is written exactly once.
fn split_scalars(flat: &[Scalar], dims: &[usize]) -> NestedArray {
    if dims.len() <= 1 {
        return NestedArray::Scalars(flat.to_vec());
    }
    let stride = shape::row_stride(dims);
    let children = (0..dims[0])
        .map(|i| split_scalars(&flat[i * stride..(i + 1) * stride], &dims[1..]))
        .collect();
    NestedArray::List(children)
}
