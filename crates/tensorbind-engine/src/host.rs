//! In-memory reference engine.

use tensorbind_core::{shape, TypedBuffer};

use crate::error::{EngineError, EngineResult};
use crate::traits::TensorEngine;

/// Handle into a [`HostEngine`]'s tensor table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostHandle(usize);

#[derive(Clone, Debug)]
struct HostTensor {
    buffer: TypedBuffer,
    shape: Vec<usize>,
}

/// Minimal in-memory tensor engine for testing and prototyping.
///
/// This is NOT a numerics backend - it stores imported buffers verbatim and
/// supports exactly the capabilities the binding layer needs. Tensors live
/// for the lifetime of the engine; there is no deallocation, matching a
/// handle table whose entries stay valid once issued.
#[derive(Debug, Default)]
pub struct HostEngine {
    tensors: Vec<HostTensor>,
}

impl HostEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tensors currently held by the engine.
    pub fn tensor_count(&self) -> usize {
        self.tensors.len()
    }

    fn lookup(&self, handle: &HostHandle) -> EngineResult<&HostTensor> {
        self.tensors
            .get(handle.0)
            .ok_or(EngineError::InvalidHandle(handle.0))
    }

    fn insert(&mut self, tensor: HostTensor) -> HostHandle {
        let id = self.tensors.len();
        self.tensors.push(tensor);
        HostHandle(id)
    }
}

impl TensorEngine for HostEngine {
    type Handle = HostHandle;
    type Error = EngineError;

    fn import_typed_buffer(
        &mut self,
        buffer: TypedBuffer,
        shape: Vec<usize>,
    ) -> EngineResult<HostHandle> {
        let expected = shape::numel(&shape);
        if buffer.len() != expected {
            return Err(EngineError::ElementCountMismatch {
                shape,
                expected,
                actual: buffer.len(),
            });
        }
        log::debug!(
            "import: {} x {} as shape {:?}",
            buffer.len(),
            buffer.kind(),
            shape
        );
        Ok(self.insert(HostTensor { buffer, shape }))
    }

    fn export_typed_buffer(&self, handle: &HostHandle) -> EngineResult<(TypedBuffer, Vec<usize>)> {
        let tensor = self.lookup(handle)?;
        Ok((tensor.buffer.clone(), tensor.shape.clone()))
    }

    fn shape(&self, handle: &HostHandle) -> EngineResult<Vec<usize>> {
        Ok(self.lookup(handle)?.shape.clone())
    }

    fn index_select(
        &mut self,
        handle: &HostHandle,
        dim: usize,
        index: usize,
    ) -> EngineResult<HostHandle> {
        let tensor = self.lookup(handle)?;
        let rank = tensor.shape.len();
        if dim != 0 || rank == 0 {
            return Err(EngineError::UnsupportedDim { dim, rank });
        }
        let size = tensor.shape[0];
        if index >= size {
            return Err(EngineError::IndexOutOfRange { dim, index, size });
        }

        let stride = shape::row_stride(&tensor.shape);
        let row = tensor.buffer.slice(index * stride..(index + 1) * stride);
        let row_shape = tensor.shape[1..].to_vec();
        log::trace!("index_select: row {index} of {size}, shape {row_shape:?}");
        Ok(self.insert(HostTensor {
            buffer: row,
            shape: row_shape,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensorbind_core::ElementKind;

    fn matrix_2x3(engine: &mut HostEngine) -> HostHandle {
        engine
            .import_typed_buffer(
                TypedBuffer::from(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]),
                vec![2, 3],
            )
            .expect("2x3 import must succeed")
    }

    #[test]
    fn test_import_export_symmetry() {
        let mut engine = HostEngine::new();
        let handle = matrix_2x3(&mut engine);

        let (buffer, shape) = engine.export_typed_buffer(&handle).unwrap();
        assert_eq!(shape, vec![2, 3]);
        assert_eq!(buffer.kind(), ElementKind::Float);
        assert_eq!(buffer, TypedBuffer::Float(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_import_rejects_count_mismatch() {
        let mut engine = HostEngine::new();
        let result =
            engine.import_typed_buffer(TypedBuffer::from(vec![1.0f32, 2.0]), vec![2, 3]);
        assert!(matches!(
            result,
            Err(EngineError::ElementCountMismatch {
                expected: 6,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_index_select_slices_rows() {
        let mut engine = HostEngine::new();
        let handle = matrix_2x3(&mut engine);

        let row = engine.index_select(&handle, 0, 1).unwrap();
        let (buffer, shape) = engine.export_typed_buffer(&row).unwrap();
        assert_eq!(shape, vec![3]);
        assert_eq!(buffer, TypedBuffer::Float(vec![4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_index_select_out_of_range() {
        let mut engine = HostEngine::new();
        let handle = matrix_2x3(&mut engine);

        let result = engine.index_select(&handle, 0, 2);
        assert!(matches!(
            result,
            Err(EngineError::IndexOutOfRange {
                index: 2,
                size: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_rank0_select_unsupported() {
        let mut engine = HostEngine::new();
        let scalar = engine
            .import_typed_buffer(TypedBuffer::from(vec![7.0f64]), vec![])
            .unwrap();
        let result = engine.index_select(&scalar, 0, 0);
        assert!(matches!(
            result,
            Err(EngineError::UnsupportedDim { dim: 0, rank: 0 })
        ));
    }

    #[test]
    fn test_invalid_handle() {
        let engine = HostEngine::new();
        let result = engine.export_typed_buffer(&HostHandle(3));
        assert!(matches!(result, Err(EngineError::InvalidHandle(3))));
    }
}
