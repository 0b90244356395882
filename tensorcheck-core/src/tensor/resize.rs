// src/tensor/resize.rs

use crate::error::TensorError;
use crate::tensor::{allocate, checked_numel, Tensor};
use crate::types::Element;
use log::debug;

impl<T: Element> Tensor<T> {
    /// Replaces the shape and resets every element to `value`.
    ///
    /// Destructive: the previous contents are discarded regardless of any
    /// overlap between the old and new shapes, and the buffer is reallocated
    /// to exactly the new size.
    ///
    /// # Errors
    /// Returns `TensorError::AllocationFailed` if the new buffer cannot be
    /// allocated. The tensor is left unchanged in that case.
    pub fn reshape(&mut self, shape: Vec<usize>, value: T) -> Result<(), TensorError> {
        let size = checked_numel(&shape)?;
        let data = allocate(size, value)?;
        debug!(
            "Tensor::reshape: {:?} -> {:?} ({} elements)",
            self.shape, shape, size
        );
        self.shape = shape;
        self.size = size;
        self.data = data;
        self.trace_buffer("reshape");
        Ok(())
    }

    /// Replaces the shape, growing the buffer only if the new size exceeds
    /// the current capacity.
    ///
    /// Existing positions are never rewritten or moved, so values at offsets
    /// valid under both the old and new shape are preserved. Positions added
    /// by growth hold `T::zero()`. The buffer never shrinks.
    ///
    /// # Errors
    /// Returns `TensorError::AllocationFailed` if growing fails. The tensor is
    /// left unchanged in that case.
    pub fn extend(&mut self, shape: Vec<usize>) -> Result<(), TensorError> {
        let size = checked_numel(&shape)?;
        if size > self.data.len() {
            let additional = size - self.data.len();
            self.data
                .try_reserve_exact(additional)
                .map_err(|_| TensorError::AllocationFailed { requested: size })?;
            self.data.resize(size, T::zero());
            debug!(
                "Tensor::extend: grew buffer to {} elements for shape {:?}",
                size, shape
            );
        }
        self.shape = shape;
        self.size = size;
        self.trace_buffer("extend");
        Ok(())
    }
}

#[cfg(test)]
#[path = "resize_test.rs"]
mod tests;
