//! # tensorcheck-core
//!
//! A small tensor container and a tolerance-based comparator used by test
//! harnesses to validate computed numeric outputs against reference values.
//!
//! - [`Tensor`] owns one contiguous row-major buffer addressed through
//!   shape-derived offsets.
//! - [`compare`](compare::compare) walks two equally-shaped tensors, classifies
//!   every element pair with a [`DifferenceType`] policy and reports a bounded
//!   number of mismatches.

// Declare the main modules of the crate
pub mod compare;
pub mod error;
pub mod tensor;
pub mod types;
pub mod utils;

// Re-export the main types so they are reachable as `tensorcheck_core::Tensor`, etc.
pub use compare::{
    compare, compare_tensors, compare_with_sink, BufferSink, CompareOptions, CompareReport,
    DifferenceType, LogCrateSink, LogSink,
};
pub use error::TensorError;
pub use tensor::{PrintOptions, Tensor};
pub use types::{Element, FloatElement, Index, Shape};
// Re-export traits required by public functions/structs
pub use num_traits;
