// src/tensor/accessors.rs
use crate::{
    error::TensorError,
    tensor::{shape, Tensor},
    types::Element,
};

impl<T: Element> Tensor<T> {
    /// Returns the tensor's shape (dimensions).
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements, `product(shape)`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of elements the backing buffer holds.
    ///
    /// Always `>= size()`; larger only after `extend` to a smaller shape.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Normalizes `axis` (negative counts from the end) against this tensor's rank.
    pub fn normalize_axis(&self, axis: isize) -> Result<usize, TensorError> {
        shape::normalize_axis(axis, self.rank())
    }

    /// Returns the extent of `axis`.
    pub fn axis_size(&self, axis: isize) -> Result<usize, TensorError> {
        let axis = self.normalize_axis(axis)?;
        Ok(self.shape[axis])
    }

    /// Returns the product of the extents in `[start_axis, end_axis)`.
    pub fn range_size(&self, start_axis: isize, end_axis: isize) -> Result<usize, TensorError> {
        shape::range_size(&self.shape, start_axis, end_axis)
    }

    /// Returns the product of the extents from `start_axis` to the last axis.
    pub fn range_size_from(&self, start_axis: isize) -> Result<usize, TensorError> {
        shape::range_size(&self.shape, start_axis, self.rank() as isize)
    }

    /// Returns the product of every extent. Equal to the cached `size()`.
    pub fn total_size(&self) -> usize {
        self.shape.iter().product()
    }

    /// Returns the row-major offset of `index`.
    ///
    /// An empty tensor (from [`Tensor::new`]) has no valid index.
    pub fn offset(&self, index: &[usize]) -> Result<usize, TensorError> {
        let offset = shape::offset(&self.shape, index)?;
        if offset >= self.size {
            return Err(TensorError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.shape.clone(),
            });
        }
        Ok(offset)
    }

    /// Returns the live elements `[0, size)` in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data[..self.size]
    }

    /// Mutable view over the live elements `[0, size)`.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data[..self.size]
    }

    /// Raw pointer to the start of the buffer.
    ///
    /// Invalidated by any reallocation in `reshape` or `extend`.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable raw pointer to the start of the buffer.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Raw pointer to the element at `index`, after validating the index.
    pub fn ptr_at(&self, index: &[usize]) -> Result<*const T, TensorError> {
        Ok(self.get(index)? as *const T)
    }

    /// Mutable raw pointer to the element at `index`, after validating the index.
    pub fn mut_ptr_at(&mut self, index: &[usize]) -> Result<*mut T, TensorError> {
        Ok(self.get_mut(index)? as *mut T)
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: &[usize]) -> Result<&T, TensorError> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T, TensorError> {
        let offset = self.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Returns a copy of the element at `index`.
    pub fn at(&self, index: &[usize]) -> Result<T, TensorError> {
        self.get(index).copied()
    }

    /// Writes `value` at `index`.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<(), TensorError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Sets every live element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data_mut().fill(value);
    }
}
