//! Owned typed buffers handed across the engine boundary.

use std::ops::Range;

use crate::{ElementKind, Scalar};

/// An owned, contiguous, homogeneously-typed memory region tagged with its
/// [`ElementKind`].
///
/// Buffers are produced fresh on every conversion and never alias host
/// storage. Booleans are modelled as a first-class buffer kind rather than
/// the int-encode-then-retag path some engines use; `from_scalars` still
/// encodes bools as 0/1 when a numeric kind is requested.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedBuffer {
    Int32(Vec<i32>),
    Double(Vec<f64>),
    Float(Vec<f32>),
    Uint8(Vec<u8>),
    Long(Vec<i64>),
    Bool(Vec<bool>),
}

impl TypedBuffer {
    /// The element kind this buffer stores.
    pub fn kind(&self) -> ElementKind {
        match self {
            TypedBuffer::Int32(_) => ElementKind::Int32,
            TypedBuffer::Double(_) => ElementKind::Double,
            TypedBuffer::Float(_) => ElementKind::Float,
            TypedBuffer::Uint8(_) => ElementKind::Uint8,
            TypedBuffer::Long(_) => ElementKind::Long,
            TypedBuffer::Bool(_) => ElementKind::Bool,
        }
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            TypedBuffer::Int32(v) => v.len(),
            TypedBuffer::Double(v) => v.len(),
            TypedBuffer::Float(v) => v.len(),
            TypedBuffer::Uint8(v) => v.len(),
            TypedBuffer::Long(v) => v.len(),
            TypedBuffer::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An empty buffer of the given kind.
    pub fn empty(kind: ElementKind) -> Self {
        TypedBuffer::from_scalars(kind, &[])
    }

    /// Encode host scalars into a buffer of the requested kind.
    ///
    /// Encoding is total: booleans become 0/1 in numeric buffers, numbers
    /// become `value != 0.0` in boolean buffers. Numeric range/precision
    /// narrowing (e.g. f64 host values into an `Int32` or `Float` buffer)
    /// is not validated here.
    pub fn from_scalars(kind: ElementKind, values: &[Scalar]) -> Self {
        match kind {
            ElementKind::Int32 => {
                TypedBuffer::Int32(values.iter().map(|s| s.as_f64() as i32).collect())
            }
            ElementKind::Double => {
                TypedBuffer::Double(values.iter().map(|s| s.as_f64()).collect())
            }
            ElementKind::Float => {
                TypedBuffer::Float(values.iter().map(|s| s.as_f64() as f32).collect())
            }
            ElementKind::Uint8 => {
                TypedBuffer::Uint8(values.iter().map(|s| s.as_f64() as u8).collect())
            }
            ElementKind::Long => {
                TypedBuffer::Long(values.iter().map(|s| s.as_f64() as i64).collect())
            }
            ElementKind::Bool => TypedBuffer::Bool(values.iter().map(|s| s.as_bool()).collect()),
        }
    }

    /// Decode the buffer back into host scalars.
    ///
    /// Boolean buffers yield `Scalar::Bool`; every numeric kind yields
    /// `Scalar::Number` widened to `f64`.
    pub fn to_scalars(&self) -> Vec<Scalar> {
        match self {
            TypedBuffer::Int32(v) => v.iter().map(|&x| Scalar::Number(x as f64)).collect(),
            TypedBuffer::Double(v) => v.iter().map(|&x| Scalar::Number(x)).collect(),
            TypedBuffer::Float(v) => v.iter().map(|&x| Scalar::Number(x as f64)).collect(),
            TypedBuffer::Uint8(v) => v.iter().map(|&x| Scalar::Number(x as f64)).collect(),
            TypedBuffer::Long(v) => v.iter().map(|&x| Scalar::Number(x as f64)).collect(),
            TypedBuffer::Bool(v) => v.iter().map(|&x| Scalar::Bool(x)).collect(),
        }
    }

    /// Copy a contiguous element range into a fresh buffer of the same kind.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, like slice indexing does.
    pub fn slice(&self, range: Range<usize>) -> Self {
        match self {
            TypedBuffer::Int32(v) => TypedBuffer::Int32(v[range].to_vec()),
            TypedBuffer::Double(v) => TypedBuffer::Double(v[range].to_vec()),
            TypedBuffer::Float(v) => TypedBuffer::Float(v[range].to_vec()),
            TypedBuffer::Uint8(v) => TypedBuffer::Uint8(v[range].to_vec()),
            TypedBuffer::Long(v) => TypedBuffer::Long(v[range].to_vec()),
            TypedBuffer::Bool(v) => TypedBuffer::Bool(v[range].to_vec()),
        }
    }
}

impl From<Vec<f32>> for TypedBuffer {
    fn from(v: Vec<f32>) -> Self {
        TypedBuffer::Float(v)
    }
}

impl From<Vec<f64>> for TypedBuffer {
    fn from(v: Vec<f64>) -> Self {
        TypedBuffer::Double(v)
    }
}

impl From<Vec<i32>> for TypedBuffer {
    fn from(v: Vec<i32>) -> Self {
        TypedBuffer::Int32(v)
    }
}

impl From<Vec<i64>> for TypedBuffer {
    fn from(v: Vec<i64>) -> Self {
        TypedBuffer::Long(v)
    }
}

impl From<Vec<u8>> for TypedBuffer {
    fn from(v: Vec<u8>) -> Self {
        TypedBuffer::Uint8(v)
    }
}

impl From<Vec<bool>> for TypedBuffer {
    fn from(v: Vec<bool>) -> Self {
        TypedBuffer::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_len() {
        let buf = TypedBuffer::from(vec![1.0f32, 2.0, 3.0]);
        assert_eq!(buf.kind(), ElementKind::Float);
        assert_eq!(buf.len(), 3);
        assert!(!buf.is_empty());
        assert!(TypedBuffer::empty(ElementKind::Long).is_empty());
    }

    #[test]
    fn test_bool_scalars_encode_as_numbers() {
        let scalars = [Scalar::Bool(true), Scalar::Bool(false), Scalar::Bool(true)];
        let buf = TypedBuffer::from_scalars(ElementKind::Int32, &scalars);
        assert_eq!(buf, TypedBuffer::Int32(vec![1, 0, 1]));
    }

    #[test]
    fn test_numbers_encode_as_bools() {
        let scalars = [Scalar::Number(0.0), Scalar::Number(2.0), Scalar::Number(-1.0)];
        let buf = TypedBuffer::from_scalars(ElementKind::Bool, &scalars);
        assert_eq!(buf, TypedBuffer::Bool(vec![false, true, true]));
    }

    #[test]
    fn test_scalar_roundtrip_float() {
        let scalars: Vec<Scalar> = [1.0, 2.5, -3.0].map(Scalar::Number).to_vec();
        let buf = TypedBuffer::from_scalars(ElementKind::Float, &scalars);
        assert_eq!(buf.to_scalars(), scalars);
    }

    #[test]
    fn test_slice_copies_range() {
        let buf = TypedBuffer::from(vec![1i32, 2, 3, 4, 5, 6]);
        let row = buf.slice(3..6);
        assert_eq!(row, TypedBuffer::Int32(vec![4, 5, 6]));
        assert_eq!(row.kind(), ElementKind::Int32);
    }
}
