//! # tensorbind-convert
//!
//! **Nested-array ingestion and materialization for the tensorbind binding
//! layer**
//!
//! This crate owns the only algorithmically interesting logic of the binding:
//! the bidirectional protocol between host-side nested arrays and the flat,
//! typed, shaped buffers a native engine consumes.
//!
//! - [`flatten`]: validate rectangularity and infer a shape vector from an
//!   arbitrarily nested array, producing a flat scalar sequence.
//! - [`infer_kind`] / [`build_buffer`]: pick an element kind when the caller
//!   left the input untyped (all-bool infers `bool`, everything else
//!   defaults to 32-bit float) and encode the flat sequence.
//! - [`tensor`] / [`tensor_from_buffer`]: the end-to-end ingestion entry
//!   points that hand the encoded buffer to the engine.
//! - [`materialize`]: the inverse path, rebuilding nesting from an exported
//!   row-major buffer and its shape.
//! - [`Tensor`] / [`RowIter`]: an adapter over the opaque engine handle
//!   exposing nested materialization and lazy iteration over dimension 0.
//!
//! All conversions are synchronous and purely transient: each call owns its
//! intermediate values, and either fully succeeds or fails before any handle
//! becomes visible.

mod adapter;
mod error;
mod flatten;
mod ingest;
mod materialize;

pub use adapter::{RowIter, Tensor};
pub use error::{ConvertError, ConvertResult};
pub use flatten::flatten;
pub use ingest::{build_buffer, infer_kind, tensor, tensor_from_buffer};
pub use materialize::materialize;
