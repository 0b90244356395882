use thiserror::Error;

/// Error type for tensor construction, indexing and comparison.
///
/// Every variant except `AllocationFailed` describes a violated precondition
/// of the caller; none of them are retried internally.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum TensorError {
    #[error("Invalid axis {axis} for tensor of rank {rank}")]
    InvalidAxis { axis: isize, rank: usize },

    #[error("Invalid axis range [{start}, {end}) for tensor of rank {rank}")]
    InvalidAxisRange { start: isize, end: isize, rank: usize },

    #[error("Rank mismatch: expected {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Failed to allocate a buffer of {requested} elements")]
    AllocationFailed { requested: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
