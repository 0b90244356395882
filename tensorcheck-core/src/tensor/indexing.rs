// src/tensor/indexing.rs

use crate::tensor::Tensor;
use crate::types::Element;
use std::ops::{Index, IndexMut};

/// Implements N-D indexing (read-only) for tensors: `tensor[&[i, j, k][..]]`.
///
/// # Panics
/// - Panics if the index rank differs from the tensor rank.
/// - Panics if any coordinate is out of bounds.
///
/// Use [`Tensor::get`] for the non-panicking variant.
impl<T: Element> Index<&[usize]> for Tensor<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: &[usize]) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Element> IndexMut<&[usize]> for Tensor<T> {
    #[inline]
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Fixed-rank sugar: `tensor[[row, col]]`.
impl<T: Element, const N: usize> Index<[usize; N]> for Tensor<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: [usize; N]) -> &Self::Output {
        &self[&index[..]]
    }
}

impl<T: Element, const N: usize> IndexMut<[usize; N]> for Tensor<T> {
    #[inline]
    fn index_mut(&mut self, index: [usize; N]) -> &mut Self::Output {
        &mut self[&index[..]]
    }
}
