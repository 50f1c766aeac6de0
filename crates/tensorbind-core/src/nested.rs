//! Host-side nested array values.

use serde::{Deserialize, Serialize};

/// A leaf value as received from the scripting host: a number or a boolean.
///
/// Numbers are carried as `f64` regardless of the buffer kind they will
/// eventually be encoded into; narrowing (e.g. into a 32-bit float buffer)
/// is the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
}

impl Scalar {
    /// Numeric value of this scalar; booleans encode as 0/1.
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Scalar::Number(n) => *n,
        }
    }

    /// Boolean value of this scalar; numbers are truthy when nonzero.
    pub fn as_bool(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => *n != 0.0,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Scalar::Bool(_))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// An arbitrarily nested array of scalars, as handed over by the host.
///
/// The untagged serde representation means plain JSON nesting such as
/// `[[1, 2], [3, 4]]` or `[true, false]` deserializes directly. Nothing here
/// enforces rectangularity; that is validated when the value is flattened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedArray {
    /// A flat run of leaf scalars.
    Scalars(Vec<Scalar>),
    /// One nesting level; children may themselves be nested.
    List(Vec<NestedArray>),
}

impl NestedArray {
    /// Build a leaf level from anything convertible to scalars.
    pub fn scalars<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        NestedArray::Scalars(values.into_iter().map(Into::into).collect())
    }

    /// Build a nesting level from child arrays.
    pub fn list<I>(children: I) -> Self
    where
        I: IntoIterator<Item = NestedArray>,
    {
        NestedArray::List(children.into_iter().collect())
    }

    /// Length of the outermost sequence.
    pub fn len(&self) -> usize {
        match self {
            NestedArray::Scalars(v) => v.len(),
            NestedArray::List(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for NestedArray {
    fn from(values: Vec<f64>) -> Self {
        NestedArray::scalars(values)
    }
}

impl From<Vec<bool>> for NestedArray {
    fn from(values: Vec<bool>) -> Self {
        NestedArray::scalars(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_coercions() {
        assert_eq!(Scalar::Bool(true).as_f64(), 1.0);
        assert_eq!(Scalar::Bool(false).as_f64(), 0.0);
        assert_eq!(Scalar::Number(2.5).as_f64(), 2.5);
        assert!(Scalar::Number(-1.0).as_bool());
        assert!(!Scalar::Number(0.0).as_bool());
    }

    #[test]
    fn test_json_nested_deserializes_untagged() {
        let nested: NestedArray = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(
            nested,
            NestedArray::list([
                NestedArray::scalars([1.0, 2.0]),
                NestedArray::scalars([3.0, 4.0]),
            ])
        );

        let flags: NestedArray = serde_json::from_str("[true, false]").unwrap();
        assert_eq!(flags, NestedArray::scalars([true, false]));
    }

    #[test]
    fn test_empty_json_is_leaf() {
        let empty: NestedArray = serde_json::from_str("[]").unwrap();
        assert_eq!(empty, NestedArray::Scalars(vec![]));
        assert!(empty.is_empty());
    }
}
