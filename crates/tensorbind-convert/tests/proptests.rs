//! Property-based tests for the conversion layer.
//!
//! These use proptest to verify the round-trip and shape-product laws of
//! flattening and materialization with randomly generated inputs.

use proptest::prelude::*;

use tensorbind_core::{shape, ElementKind, NestedArray, Scalar};
use tensorbind_convert::{build_buffer, flatten, infer_kind, materialize, ConvertError};

/// Build a rectangular nested array for a (rank >= 1, all dims nonzero)
/// shape by consuming values in row-major order.
fn rectangular(dims: &[usize], values: &mut impl Iterator<Item = f64>) -> NestedArray {
    if dims.len() == 1 {
        NestedArray::scalars(values.by_ref().take(dims[0]).collect::<Vec<_>>())
    } else {
        let mut children = Vec::with_capacity(dims[0]);
        for _ in 0..dims[0] {
            children.push(rectangular(&dims[1..], values));
        }
        NestedArray::List(children)
    }
}

fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..5, 1..=3)
}

/// Arbitrary nested arrays, rectangular or not.
fn nested_strategy() -> impl Strategy<Value = NestedArray> {
    let leaf = prop::collection::vec(-100.0f64..100.0, 0..6)
        .prop_map(NestedArray::from);
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(NestedArray::List)
    })
}

proptest! {
    /// Round-trip law: materializing a flattened rectangular array
    /// reproduces it exactly (double kind, so no narrowing).
    #[test]
    fn prop_roundtrip_rectangular(dims in shape_strategy()) {
        let total = shape::numel(&dims);
        let mut values = (0..total).map(|i| i as f64 * 0.5 - 3.0);
        let original = rectangular(&dims, &mut values);

        let (flat, inferred) = flatten(&original).unwrap();
        prop_assert_eq!(&inferred, &dims);

        let buffer = build_buffer(&flat, &inferred, ElementKind::Double).unwrap();
        let back = materialize(&buffer, &inferred).unwrap();
        prop_assert_eq!(back, original);
    }

    /// Shape product invariant: every successful flatten satisfies
    /// product(shape) == flat.len().
    #[test]
    fn prop_shape_product(nested in nested_strategy()) {
        match flatten(&nested) {
            Ok((flat, inferred)) => {
                prop_assert_eq!(flat.len(), shape::numel(&inferred));
                prop_assert!(!inferred.is_empty());
            }
            Err(err) => prop_assert!(
                matches!(err, ConvertError::ShapeMismatch { .. }),
                "expected ShapeMismatch, got {:?}",
                err
            ),
        }
    }

    /// Re-flattening a materialized buffer reproduces the flat order.
    #[test]
    fn prop_flatten_after_materialize(dims in shape_strategy()) {
        let total = shape::numel(&dims);
        let data: Vec<f64> = (0..total).map(|i| i as f64).collect();
        let buffer = tensorbind_core::TypedBuffer::from(data.clone());

        let nested = materialize(&buffer, &dims).unwrap();
        let (flat, inferred) = flatten(&nested).unwrap();
        prop_assert_eq!(inferred, dims);
        let numbers: Vec<f64> = flat.iter().map(Scalar::as_f64).collect();
        prop_assert_eq!(numbers, data);
    }

    /// Kind inference is total and follows the all-bool-else-float policy.
    #[test]
    fn prop_kind_inference_policy(
        bools in prop::collection::vec(any::<bool>(), 1..10),
        numbers in prop::collection::vec(-100.0f64..100.0, 1..10),
    ) {
        let bool_flat: Vec<Scalar> = bools.iter().map(|&b| Scalar::Bool(b)).collect();
        prop_assert_eq!(infer_kind(&bool_flat), ElementKind::Bool);

        let num_flat: Vec<Scalar> = numbers.iter().map(|&n| Scalar::Number(n)).collect();
        prop_assert_eq!(infer_kind(&num_flat), ElementKind::Float);

        let mut mixed = bool_flat;
        mixed.extend(num_flat);
        prop_assert_eq!(infer_kind(&mixed), ElementKind::Float);
    }
}
