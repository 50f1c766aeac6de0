//! Core capability trait for native tensor engines.

use tensorbind_core::TypedBuffer;

/// The capabilities a native tensor engine must expose to the binding layer.
///
/// Implementations own all tensor storage and lifetimes; the binding layer
/// only holds opaque handles. Every method is synchronous and blocking from
/// this layer's perspective: any offload to worker contexts happens inside
/// the engine.
pub trait TensorEngine {
    /// Opaque reference into the engine's tensor table. `Clone` is required
    /// so adapters can hold a handle without borrowing the engine.
    type Handle: Clone;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Hand an owned typed buffer plus its shape to the engine.
    ///
    /// Fails when the buffer's element count does not equal the product of
    /// the shape vector.
    fn import_typed_buffer(
        &mut self,
        buffer: TypedBuffer,
        shape: Vec<usize>,
    ) -> Result<Self::Handle, Self::Error>;

    /// Read back a tensor's current storage and shape, with no conversion.
    fn export_typed_buffer(
        &self,
        handle: &Self::Handle,
    ) -> Result<(TypedBuffer, Vec<usize>), Self::Error>;

    /// The tensor's shape vector, outermost dimension first.
    fn shape(&self, handle: &Self::Handle) -> Result<Vec<usize>, Self::Error>;

    /// Select one index along `dim`, producing a tensor of rank one less.
    ///
    /// Fails when `index` is at or beyond the size along `dim`. The binding
    /// layer only ever passes `dim == 0`.
    fn index_select(
        &mut self,
        handle: &Self::Handle,
        dim: usize,
        index: usize,
    ) -> Result<Self::Handle, Self::Error>;
}
