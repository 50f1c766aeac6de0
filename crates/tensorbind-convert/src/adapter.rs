//! Adapter methods over a foreign engine handle.
//!
//! The engine's handle is opaque and externally owned; instead of patching
//! behavior onto it, [`Tensor`] wraps the handle together with a mutable
//! borrow of its engine and exposes derived operations (shape query, nested
//! materialization, row iteration) as adapter methods.

use tensorbind_core::NestedArray;
use tensorbind_engine::TensorEngine;

use crate::error::{ConvertError, ConvertResult};
use crate::materialize::materialize;

/// A tensor handle paired with the engine that owns it.
pub struct Tensor<'e, E: TensorEngine> {
    engine: &'e mut E,
    handle: E::Handle,
}

impl<'e, E: TensorEngine> Tensor<'e, E> {
    pub fn new(engine: &'e mut E, handle: E::Handle) -> Self {
        Tensor { engine, handle }
    }

    /// The underlying engine handle.
    pub fn handle(&self) -> &E::Handle {
        &self.handle
    }

    /// Shape vector as reported by the engine.
    pub fn shape(&self) -> ConvertResult<Vec<usize>> {
        self.engine.shape(&self.handle).map_err(ConvertError::engine)
    }

    /// Export the tensor's storage and rebuild its nested-array form.
    pub fn to_nested(&self) -> ConvertResult<NestedArray> {
        let (buffer, shape) = self
            .engine
            .export_typed_buffer(&self.handle)
            .map_err(ConvertError::engine)?;
        materialize(&buffer, &shape)
    }

    /// Iterate over dimension 0, yielding one sub-tensor handle per index.
    ///
    /// The leading size is queried once here; each step then performs a
    /// single engine `index_select` call, so only one extra handle is in
    /// flight at a time. Calling `rows` again starts a fresh iteration from
    /// index 0. A rank-0 source has no leading dimension and yields an
    /// immediately-exhausted iterator.
    pub fn rows(&mut self) -> ConvertResult<RowIter<'_, E>> {
        let shape = self
            .engine
            .shape(&self.handle)
            .map_err(ConvertError::engine)?;
        let len = shape.first().copied().unwrap_or(0);
        Ok(RowIter {
            engine: &mut *self.engine,
            handle: self.handle.clone(),
            index: 0,
            len,
        })
    }
}

/// Lazy iterator over a tensor's leading dimension.
///
/// Yields `Result` items: the first engine failure is yielded once and the
/// iterator fuses.
pub struct RowIter<'e, E: TensorEngine> {
    engine: &'e mut E,
    handle: E::Handle,
    index: usize,
    len: usize,
}

impl<E: TensorEngine> Iterator for RowIter<'_, E> {
    type Item = ConvertResult<E::Handle>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        match self.engine.index_select(&self.handle, 0, self.index) {
            Ok(row) => {
                self.index += 1;
                Some(Ok(row))
            }
            Err(err) => {
                self.index = self.len;
                Some(Err(ConvertError::engine(err)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<E: TensorEngine> ExactSizeIterator for RowIter<'_, E> {}
