//! Shape inference and flattening of nested host arrays.

use tensorbind_core::{shape, NestedArray, Scalar};

use crate::error::{ConvertError, ConvertResult};

/// Flatten a nested array into a flat scalar sequence plus its inferred
/// shape vector, outermost dimension first.
///
/// Rectangularity is enforced at every depth: the first child fixes the
/// expected sub-shape, and any sibling that disagrees fails with
/// [`ConvertError::ShapeMismatch`]. Element order is preserved. An empty
/// outer sequence yields `(vec![], vec![0])`.
pub fn flatten(array: &NestedArray) -> ConvertResult<(Vec<Scalar>, Vec<usize>)> {
    let (flat, inferred) = flatten_at(array, 0)?;
    debug_assert_eq!(flat.len(), shape::numel(&inferred));
    log::trace!("flatten: {} elements, shape {:?}", flat.len(), inferred);
    Ok((flat, inferred))
}

fn flatten_at(array: &NestedArray, depth: usize) -> ConvertResult<(Vec<Scalar>, Vec<usize>)> {
    match array {
        NestedArray::Scalars(values) => Ok((values.clone(), vec![values.len()])),
        NestedArray::List(children) => {
            let mut flat = Vec::new();
            let mut child_shape: Option<Vec<usize>> = None;
            for (index, child) in children.iter().enumerate() {
                let (child_flat, found) = flatten_at(child, depth + 1)?;
                match &child_shape {
                    None => child_shape = Some(found),
                    Some(expected) => {
                        if *expected != found {
                            return Err(ConvertError::ShapeMismatch {
                                depth,
                                index,
                                expected: expected.clone(),
                                found,
                            });
                        }
                    }
                }
                flat.extend(child_flat);
            }

            let mut inferred = Vec::with_capacity(1 + child_shape.as_ref().map_or(0, Vec::len));
            inferred.push(children.len());
            inferred.extend(child_shape.unwrap_or_default());
            Ok((flat, inferred))
        }
    }
}
