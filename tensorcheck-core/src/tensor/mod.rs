// src/tensor/mod.rs

use crate::error::TensorError;
use crate::types::{Element, Shape};
use log::debug;

mod accessors;
pub mod create;
mod debug;
mod indexing;
mod resize;
pub mod shape;

pub use create::{from_fn, full, full_like, rand_uniform, randn, zeros, zeros_like};
pub use debug::PrintOptions;

/// A multi-dimensional array backed by one contiguous, row-major buffer.
///
/// The tensor exclusively owns its buffer. `size` caches the product of the
/// shape; the buffer may hold more elements than `size` after an
/// [`extend`](Tensor::extend) to a smaller shape, in which case the extra
/// positions are kept as spare capacity and never exposed through the safe
/// accessors.
pub struct Tensor<T: Element> {
    pub(crate) shape: Shape,
    pub(crate) size: usize,
    pub(crate) data: Vec<T>,
}

impl<T: Element> Tensor<T> {
    /// Creates an empty tensor: rank 0, size 0, no buffer.
    pub fn new() -> Self {
        Tensor {
            shape: Vec::new(),
            size: 0,
            data: Vec::new(),
        }
    }

    /// Creates a tensor of the given shape with every element set to `value`.
    ///
    /// An empty shape yields a rank-0 scalar holding one element.
    ///
    /// # Errors
    /// Returns `TensorError::AllocationFailed` if the buffer cannot be allocated.
    pub fn with_shape(shape: Vec<usize>, value: T) -> Result<Self, TensorError> {
        let size = checked_numel(&shape)?;
        let data = allocate(size, value)?;
        let tensor = Tensor { shape, size, data };
        tensor.trace_buffer("with_shape");
        Ok(tensor)
    }

    /// Creates a tensor of the given shape filled with `T::zero()`.
    pub fn zeros(shape: Vec<usize>) -> Result<Self, TensorError> {
        Self::with_shape(shape, T::zero())
    }

    /// Creates a tensor from row-major data.
    ///
    /// # Errors
    /// Returns `TensorError::TensorCreationError` if the length of `data` does not
    /// match the number of elements described by `shape`.
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self, TensorError> {
        let size = checked_numel(&shape)?;
        if data.len() != size {
            return Err(TensorError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(Tensor { shape, size, data })
    }

    #[cfg(feature = "diagnostics")]
    pub(crate) fn trace_buffer(&self, operation: &str) {
        log::trace!(
            "Tensor::{}: buffer at {:p}, capacity {}, size {}, shape {:?}",
            operation,
            self.data.as_ptr(),
            self.data.len(),
            self.size,
            self.shape
        );
    }

    #[cfg(not(feature = "diagnostics"))]
    #[inline]
    pub(crate) fn trace_buffer(&self, _operation: &str) {}
}

impl<T: Element> Default for Tensor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for Tensor<T> {
    fn clone(&self) -> Self {
        Tensor {
            shape: self.shape.clone(),
            size: self.size,
            data: self.data.clone(),
        }
    }
}

/// Two tensors are equal when their shapes and live elements match.
/// Spare capacity is not compared.
impl<T: Element> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data() == other.data()
    }
}

/// Product of the extents, or `AllocationFailed` if it overflows `usize`.
pub(crate) fn checked_numel(shape: &[usize]) -> Result<usize, TensorError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or(TensorError::AllocationFailed {
            requested: usize::MAX,
        })
}

/// Allocates exactly `size` elements set to `value`, reporting allocator failure.
pub(crate) fn allocate<T: Element>(size: usize, value: T) -> Result<Vec<T>, TensorError> {
    let mut data = Vec::new();
    data.try_reserve_exact(size)
        .map_err(|_| TensorError::AllocationFailed { requested: size })?;
    data.resize(size, value);
    debug!("Tensor: allocated buffer of {} elements", size);
    Ok(data)
}
