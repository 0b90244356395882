// src/tensor/shape.rs

use crate::error::TensorError;

/// Normalizes a possibly negative axis against `rank`.
///
/// Negative axes count from the end (`-1` is the innermost axis). The result
/// must land in `[0, rank)`.
///
/// Example:
/// normalize_axis(-1, 3) -> Ok(2)
/// normalize_axis(3, 3) -> Err(InvalidAxis)
pub fn normalize_axis(axis: isize, rank: usize) -> Result<usize, TensorError> {
    let normalized = normalize_bound(axis, rank);
    match normalized {
        Some(a) if a < rank => Ok(a),
        _ => Err(TensorError::InvalidAxis { axis, rank }),
    }
}

// Like `normalize_axis`, but `rank` itself is a valid (one-past-the-end) bound.
fn normalize_bound(axis: isize, rank: usize) -> Option<usize> {
    let shifted = if axis < 0 {
        axis.checked_add(isize::try_from(rank).ok()?)?
    } else {
        axis
    };
    usize::try_from(shifted).ok().filter(|&a| a <= rank)
}

/// Returns the product of `shape[start..end)` after normalizing both bounds.
///
/// Either bound may equal the rank. The empty product is 1.
pub fn range_size(shape: &[usize], start: isize, end: isize) -> Result<usize, TensorError> {
    let rank = shape.len();
    let invalid = || TensorError::InvalidAxisRange { start, end, rank };
    let lo = normalize_bound(start, rank).ok_or_else(invalid)?;
    let hi = normalize_bound(end, rank).ok_or_else(invalid)?;
    if lo > hi {
        return Err(invalid());
    }
    Ok(shape[lo..hi].iter().product())
}

/// Computes the row-major offset of `index` inside `shape`.
///
/// The offset is accumulated left to right: `offset = offset * shape[a] + index[a]`.
/// This is a bijection between the valid indices and `[0, product(shape))`.
pub fn offset(shape: &[usize], index: &[usize]) -> Result<usize, TensorError> {
    if index.len() != shape.len() {
        return Err(TensorError::RankMismatch {
            expected: shape.len(),
            actual: index.len(),
        });
    }
    let mut offset = 0;
    for (&extent, &coord) in shape.iter().zip(index.iter()) {
        if coord >= extent {
            return Err(TensorError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: shape.to_vec(),
            });
        }
        offset = offset * extent + coord;
    }
    Ok(offset)
}

/// Calculates the row-major strides for a given shape.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Converts a flat offset back to per-axis coordinates. Inverse of [`offset`].
pub fn offset_to_index(offset: usize, shape: &[usize]) -> Result<Vec<usize>, TensorError> {
    let size = crate::tensor::checked_numel(shape)?;
    if offset >= size {
        return Err(TensorError::IndexOutOfBounds {
            index: vec![offset],
            shape: shape.to_vec(),
        });
    }
    let strides = calculate_strides(shape);
    let mut remaining = offset;
    let index = strides
        .iter()
        .map(|&stride| {
            let coord = remaining / stride;
            remaining %= stride;
            coord
        })
        .collect();
    Ok(index)
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod tests;
