//! Shape vector helpers.
//!
//! Shapes are plain `Vec<usize>` / `&[usize]` throughout, outermost dimension
//! first, row-major layout (last dimension varies fastest).

/// Total element count implied by a shape. The empty (rank-0) shape has one
/// element, per the usual row-major convention.
pub fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Elements per step along dimension 0, i.e. the product of the trailing
/// dimensions. For rank-0 and rank-1 shapes this is 1.
pub fn row_stride(shape: &[usize]) -> usize {
    shape.iter().skip(1).product()
}
