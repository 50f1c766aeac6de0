//! Scalar storage encoding tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A scalar storage encoding understood by the native engine.
///
/// The string tags (`"int32"`, `"double"`, ...) are the engine's own dtype
/// names and are what [`fmt::Display`] and the serde representation produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit float.
    Double,
    /// 32-bit float.
    Float,
    /// 8-bit unsigned integer.
    Uint8,
    /// 64-bit signed integer.
    Long,
    /// Boolean.
    Bool,
}

impl ElementKind {
    /// All recognized kinds, in tag order.
    pub const ALL: [ElementKind; 6] = [
        ElementKind::Int32,
        ElementKind::Double,
        ElementKind::Float,
        ElementKind::Uint8,
        ElementKind::Long,
        ElementKind::Bool,
    ];

    /// The engine-side tag names, parallel to [`ElementKind::ALL`].
    pub const NAMES: &'static [&'static str] =
        &["int32", "double", "float", "uint8", "long", "bool"];

    /// Engine-side tag name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Int32 => "int32",
            ElementKind::Double => "double",
            ElementKind::Float => "float",
            ElementKind::Uint8 => "uint8",
            ElementKind::Long => "long",
            ElementKind::Bool => "bool",
        }
    }

    /// Width in bytes of one element in a buffer of this kind.
    pub fn byte_width(&self) -> usize {
        match self {
            ElementKind::Int32 | ElementKind::Float => 4,
            ElementKind::Double | ElementKind::Long => 8,
            ElementKind::Uint8 | ElementKind::Bool => 1,
        }
    }

    /// Whether buffers of this kind hold booleans rather than numbers.
    pub fn is_bool(&self) -> bool {
        matches!(self, ElementKind::Bool)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int32" => Ok(ElementKind::Int32),
            "double" => Ok(ElementKind::Double),
            "float" => Ok(ElementKind::Float),
            "uint8" => Ok(ElementKind::Uint8),
            "long" => Ok(ElementKind::Long),
            "bool" => Ok(ElementKind::Bool),
            other => Err(CoreError::unsupported_kind(other)),
        }
    }
}
