//! Typed buffer construction and tensor ingestion.

use tensorbind_core::{shape, ElementKind, NestedArray, Scalar, TypedBuffer};
use tensorbind_engine::TensorEngine;

use crate::error::{ConvertError, ConvertResult};
use crate::flatten::flatten;

/// Pick an element kind for a flat sequence the caller left untyped.
///
/// The policy is deliberately small, not a type-inference system: a sequence
/// that is entirely booleans infers [`ElementKind::Bool`]; everything else
/// (including the empty sequence) defaults to [`ElementKind::Float`].
///
/// Note the default silently narrows f64 host numbers to 32-bit floats;
/// callers that care about integer exactness or double precision must pass
/// an explicit kind.
pub fn infer_kind(flat: &[Scalar]) -> ElementKind {
    if !flat.is_empty() && flat.iter().all(Scalar::is_bool) {
        ElementKind::Bool
    } else {
        ElementKind::Float
    }
}

/// Encode a flat scalar sequence into a typed buffer, validating the
/// element count against the shape's product.
pub fn build_buffer(
    flat: &[Scalar],
    buffer_shape: &[usize],
    kind: ElementKind,
) -> ConvertResult<TypedBuffer> {
    let expected = shape::numel(buffer_shape);
    if flat.len() != expected {
        return Err(ConvertError::ShapeElementCountMismatch {
            shape: buffer_shape.to_vec(),
            expected,
            actual: flat.len(),
        });
    }
    Ok(TypedBuffer::from_scalars(kind, flat))
}

/// Ingest a nested host array into the engine: flatten, pick a kind, encode,
/// import.
///
/// A caller-supplied `shape` overrides the inferred one (the element count is
/// still validated against it); a caller-supplied `kind` skips inference.
pub fn tensor<E: TensorEngine>(
    engine: &mut E,
    data: &NestedArray,
    shape: Option<Vec<usize>>,
    kind: Option<ElementKind>,
) -> ConvertResult<E::Handle> {
    let (flat, inferred_shape) = flatten(data)?;
    let tensor_shape = shape.unwrap_or(inferred_shape);
    let kind = kind.unwrap_or_else(|| infer_kind(&flat));
    let buffer = build_buffer(&flat, &tensor_shape, kind)?;
    log::debug!(
        "tensor: ingesting {} x {} as shape {:?}",
        buffer.len(),
        kind,
        tensor_shape
    );
    engine
        .import_typed_buffer(buffer, tensor_shape)
        .map_err(ConvertError::engine)
}

/// Ingest an already-typed buffer, defaulting the shape to `[len]`.
///
/// This is the fast path for hosts that hand over a typed array directly;
/// no flattening or kind inference happens.
pub fn tensor_from_buffer<E: TensorEngine>(
    engine: &mut E,
    buffer: TypedBuffer,
    shape: Option<Vec<usize>>,
) -> ConvertResult<E::Handle> {
    let tensor_shape = shape.unwrap_or_else(|| vec![buffer.len()]);
    engine
        .import_typed_buffer(buffer, tensor_shape)
        .map_err(ConvertError::engine)
}
