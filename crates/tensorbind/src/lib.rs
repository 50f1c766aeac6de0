//! Tensorbind - host-side binding layer for a native tensor engine
//!
//! This is the top-level umbrella crate that re-exports all tensorbind
//! components.
//!
//! # Architecture
//!
//! - **Data model**: `core` (element kinds, scalars, nested arrays, typed
//!   buffers)
//! - **Engine seam**: `engine` (the `TensorEngine` capability trait and the
//!   in-memory reference engine)
//! - **Conversion layer**: `convert` (flattening, kind inference, buffer
//!   construction, materialization, row iteration)

pub use tensorbind_convert as convert;
pub use tensorbind_core as core;
pub use tensorbind_engine as engine;

pub use tensorbind_convert::{tensor, tensor_from_buffer, RowIter, Tensor};
pub use tensorbind_core::{ElementKind, NestedArray, Scalar, TypedBuffer};
pub use tensorbind_engine::{HostEngine, TensorEngine};
