//! # tensorbind-engine
//!
//! **Capability seam between the host-side conversion layer and a native
//! tensor engine**
//!
//! The binding layer never inspects tensor storage itself; it talks to the
//! engine through the small set of capabilities in [`TensorEngine`]:
//! importing a typed buffer, exporting one back, querying a shape, and
//! selecting one index along a dimension. Everything the engine does beyond
//! that (arithmetic, autograd, devices, codecs) is out of scope here.
//!
//! [`HostEngine`] is an in-memory reference implementation of the seam.
//! It is NOT a numerics backend - it exists so the conversion layer and its
//! tests can exercise the trait without linking a native engine.

mod error;
mod host;
mod traits;

pub use error::{EngineError, EngineResult};
pub use host::{HostEngine, HostHandle};
pub use traits::TensorEngine;
