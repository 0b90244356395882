// src/tensor/create.rs

use crate::error::TensorError;
use crate::tensor::{allocate, checked_numel, Tensor};
use crate::types::{Element, FloatElement};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::{Normal, StandardNormal};

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros<T: Element>(shape: &[usize]) -> Result<Tensor<T>, TensorError> {
    Tensor::with_shape(shape.to_vec(), T::zero())
}

/// Creates a new tensor filled with `value` with the specified shape.
pub fn full<T: Element>(shape: &[usize], value: T) -> Result<Tensor<T>, TensorError> {
    Tensor::with_shape(shape.to_vec(), value)
}

/// Creates a zero-filled tensor with the same shape as `tensor`.
pub fn zeros_like<T: Element>(tensor: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    zeros(tensor.shape())
}

/// Creates a tensor with the same shape as `tensor`, filled with `value`.
pub fn full_like<T: Element>(tensor: &Tensor<T>, value: T) -> Result<Tensor<T>, TensorError> {
    full(tensor.shape(), value)
}

/// Creates a tensor whose element at each index is `f(index)`.
///
/// Indices are visited in row-major order.
pub fn from_fn<T, F>(shape: &[usize], mut f: F) -> Result<Tensor<T>, TensorError>
where
    T: Element,
    F: FnMut(&[usize]) -> T,
{
    let size = checked_numel(shape)?;
    let mut data = allocate(size, T::zero())?;
    let mut index = vec![0usize; shape.len()];
    for slot in data.iter_mut() {
        *slot = f(&index);
        // Advance the odometer, innermost axis first.
        for axis in (0..shape.len()).rev() {
            index[axis] += 1;
            if index[axis] < shape[axis] {
                break;
            }
            index[axis] = 0;
        }
    }
    Tensor::from_vec(data, shape.to_vec())
}

/// Creates a tensor filled with values drawn uniformly from `[low, high)`.
///
/// # Errors
/// Returns `TensorError::InvalidArgument` if `low >= high` or a bound is not finite.
pub fn rand_uniform<T, R>(
    shape: &[usize],
    low: T,
    high: T,
    rng: &mut R,
) -> Result<Tensor<T>, TensorError>
where
    T: FloatElement + SampleUniform,
    R: Rng + ?Sized,
{
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(TensorError::InvalidArgument(format!(
            "rand_uniform requires finite low < high, got [{}, {})",
            low, high
        )));
    }
    let distribution = Uniform::new(low, high);
    let size = checked_numel(shape)?;
    let mut data = allocate(size, T::zero())?;
    for slot in data.iter_mut() {
        *slot = distribution.sample(rng);
    }
    Tensor::from_vec(data, shape.to_vec())
}

/// Creates a tensor filled with normally distributed values.
///
/// # Errors
/// Returns `TensorError::InvalidArgument` if `std_dev` is negative or not finite.
pub fn randn<T, R>(
    shape: &[usize],
    mean: T,
    std_dev: T,
    rng: &mut R,
) -> Result<Tensor<T>, TensorError>
where
    T: FloatElement,
    StandardNormal: Distribution<T>,
    R: Rng + ?Sized,
{
    let distribution = Normal::new(mean, std_dev).map_err(|e| {
        TensorError::InvalidArgument(format!(
            "randn(mean = {}, std_dev = {}): {}",
            mean, std_dev, e
        ))
    })?;
    let size = checked_numel(shape)?;
    let mut data = allocate(size, T::zero())?;
    for slot in data.iter_mut() {
        *slot = distribution.sample(rng);
    }
    Tensor::from_vec(data, shape.to_vec())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
