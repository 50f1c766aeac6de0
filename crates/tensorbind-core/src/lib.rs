//! # tensorbind-core
//!
//! **Engine-agnostic data model for the tensorbind binding layer**
//!
//! This crate provides the host-side value types that cross the boundary into
//! a native tensor engine, and nothing else: no numerics, no engine calls.
//! It serves as the foundational layer the other tensorbind crates build upon.
//!
//! ## Core Components
//!
//! ### Element kinds ([`ElementKind`])
//! The six scalar storage encodings the wrapped engine understands
//! (`int32`, `double`, `float`, `uint8`, `long`, `bool`), with their byte
//! widths and string tags.
//!
//! ### Host values ([`Scalar`], [`NestedArray`])
//! The leaf values a scripting host hands us (numbers and booleans) and the
//! recursively nested arrays they arrive in. Rectangularity is a property
//! checked at flatten time, not encoded in the type.
//!
//! ### Typed buffers ([`TypedBuffer`])
//! Owned, contiguous, homogeneously-typed storage tagged with its
//! [`ElementKind`] — the exact payload the engine's buffer-import entry
//! point consumes. Always a fresh copy; never aliases host storage.

mod buffer;
mod dtype;
mod error;
mod nested;
pub mod shape;

pub use buffer::TypedBuffer;
pub use dtype::ElementKind;
pub use error::CoreError;
pub use nested::{NestedArray, Scalar};
