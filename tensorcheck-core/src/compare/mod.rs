// tensorcheck-core/src/compare/mod.rs

//! # Tolerance-based tensor comparison
//!
//! Walks two equally-shaped tensors coordinate by coordinate, outermost axis
//! first, and classifies every element pair with a [`DifferenceType`].
//!
//! Traversal stops early once `error_count_max` mismatches have been found,
//! so the reported count is a lower bound on the true number of mismatches
//! whenever the cap is hit.

use crate::error::TensorError;
use crate::tensor::Tensor;
use crate::types::FloatElement;
use log::{debug, Level};
use std::fmt::Write;

mod options;
mod sink;

pub use options::{CompareOptions, DifferenceType};
pub use sink::{BufferSink, LogCrateSink, LogSink};

/// Outcome of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareReport {
    /// True iff no mismatch was found.
    pub passed: bool,
    /// Mismatches found before traversal stopped.
    pub error_count: usize,
    /// The report delivered to the sink, if any.
    pub message: Option<String>,
}

/// Absolute and relative difference of an element pair.
///
/// The relative difference is `absolute / max(|a|, |b|)`, defined as 0 when
/// both values are exactly zero.
pub fn differences<T: FloatElement>(a: T, b: T) -> (T, T) {
    let absolute = (a - b).abs();
    let scale = a.abs().max(b.abs());
    let relative = if scale.is_zero() {
        T::zero()
    } else {
        absolute / scale
    };
    (absolute, relative)
}

/// Compares `a` against `b`, delivering any failure report through the `log` crate.
pub fn compare<T: FloatElement>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    options: &CompareOptions,
) -> Result<CompareReport, TensorError> {
    compare_with_sink(a, b, options, &LogCrateSink)
}

/// Flat entry point: `(passed, error_count)`.
pub fn compare_tensors<T: FloatElement>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    difference_max: f64,
    print_errors: bool,
    error_count_max: usize,
    difference_type: DifferenceType,
    description: &str,
) -> Result<(bool, usize), TensorError> {
    let options = CompareOptions {
        difference_max,
        print_errors,
        error_count_max,
        difference_type,
        description: description.to_string(),
    };
    let report = compare(a, b, &options)?;
    Ok((report.passed, report.error_count))
}

/// Compares `a` against `b` and delivers the failure report, if any, to `sink`.
///
/// # Errors
/// Returns `TensorError::ShapeMismatch` if the shapes differ; no element is
/// read in that case.
pub fn compare_with_sink<T, S>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    options: &CompareOptions,
    sink: &S,
) -> Result<CompareReport, TensorError>
where
    T: FloatElement,
    S: LogSink + ?Sized,
{
    // An empty tensor and a scalar share the shape `[]`; the sizes tell them apart.
    if a.shape() != b.shape() || a.size() != b.size() {
        return Err(TensorError::ShapeMismatch {
            expected: b.shape().to_vec(),
            actual: a.shape().to_vec(),
            operation: "compare".to_string(),
        });
    }

    let mut walk = Traversal {
        a,
        b,
        options,
        error_count: 0,
        stop_reported: false,
        message: String::new(),
    };
    if !a.is_empty() {
        let mut index = vec![0usize; a.rank()];
        walk.visit(&mut index, 0)?;
    }

    let error_count = walk.error_count;
    debug!(
        "compare: {} mismatches ({} policy, max {}) over shape {:?}",
        error_count,
        options.difference_type,
        options.difference_max,
        a.shape()
    );
    let message = if options.print_errors && error_count > 0 {
        sink.log(Level::Error, &walk.message);
        Some(walk.message)
    } else {
        None
    };
    Ok(CompareReport {
        passed: error_count == 0,
        error_count,
        message,
    })
}

// Local accumulators of one comparison.
struct Traversal<'a, T: FloatElement> {
    a: &'a Tensor<T>,
    b: &'a Tensor<T>,
    options: &'a CompareOptions,
    error_count: usize,
    stop_reported: bool,
    message: String,
}

impl<T: FloatElement> Traversal<'_, T> {
    fn visit(&mut self, index: &mut [usize], depth: usize) -> Result<(), TensorError> {
        if depth == index.len() {
            return self.check(index);
        }
        let extent = self.a.shape()[depth];
        for coord in 0..extent {
            if self.error_count >= self.options.error_count_max {
                // Coordinates from `coord` on are skipped.
                self.report_stop();
                break;
            }
            index[depth] = coord;
            self.visit(index, depth + 1)?;
        }
        Ok(())
    }

    fn check(&mut self, index: &[usize]) -> Result<(), TensorError> {
        let va = self.a.at(index)?;
        let vb = self.b.at(index)?;
        let (absolute, relative) = differences(va, vb);
        let absolute = absolute.to_f64().unwrap_or(f64::NAN);
        let relative = relative.to_f64().unwrap_or(f64::NAN);
        if !self
            .options
            .difference_type
            .is_error(absolute, relative, self.options.difference_max)
        {
            return Ok(());
        }

        self.error_count += 1;
        if !self.options.print_errors {
            return Ok(());
        }
        // Writing into a String cannot fail.
        if self.error_count == 1 {
            let _ = write!(
                self.message,
                "\nFail comparison: {}\n",
                self.options.description
            );
        }
        let coords = index
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            self.message,
            "Error at [{}] : {:.6} != {:.6}; (absolute = {:.6}, relative = {:.6})!",
            coords, va, vb, absolute, relative
        );
        Ok(())
    }

    fn report_stop(&mut self) {
        if self.options.print_errors && self.error_count > 0 && !self.stop_reported {
            self.stop_reported = true;
            self.message.push_str("Stop comparison.\n");
        }
    }
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
