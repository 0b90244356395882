use crate::compare::{compare, CompareOptions};
use crate::tensor::Tensor;
use crate::types::{Element, FloatElement};
use approx::AbsDiffEq;

/// Checks that `actual` has `expected_shape` and that every element is within
/// `tolerance` (absolute difference) of `expected_data`.
///
/// Panics with the first mismatching offset, its index and both values.
pub fn check_tensor_near<T>(
    actual: &Tensor<T>,
    expected_shape: &[usize],
    expected_data: &[T],
    tolerance: T,
) where
    T: Element + AbsDiffEq<Epsilon = T>,
{
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.data().len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.data().iter().zip(expected_data.iter()).enumerate() {
        if !a.abs_diff_eq(e, tolerance) {
            let index = crate::tensor::shape::offset_to_index(i, expected_shape).unwrap_or_default();
            panic!(
                "Data mismatch at offset {} (index {:?}): actual={:?}, expected={:?}, tolerance={:?}",
                i, index, a, e, tolerance
            );
        }
    }
}

/// Asserts that `actual` matches `expected` under `options`.
///
/// Panics with the comparison report on failure or shape mismatch. The
/// report is also delivered through the `log` crate when `print_errors` is set.
pub fn assert_tensors_close<T: FloatElement>(
    actual: &Tensor<T>,
    expected: &Tensor<T>,
    options: &CompareOptions,
) {
    match compare(actual, expected, options) {
        Ok(report) if report.passed => {}
        Ok(report) => panic!(
            "Tensors differ: {} mismatches (stopped at {}){}",
            report.error_count,
            options.error_count_max,
            report.message.unwrap_or_default()
        ),
        Err(e) => panic!("Tensor comparison failed: {}", e),
    }
}
