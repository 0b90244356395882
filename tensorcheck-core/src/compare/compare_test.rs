// tensorcheck-core/src/compare/compare_test.rs

#[cfg(test)]
mod tests {
    use crate::compare::*;
    use crate::error::TensorError;
    use crate::tensor::Tensor;
    use approx::assert_relative_eq;
    use log::Level;

    fn scalar_pair(va: f32, vb: f32) -> (Tensor<f32>, Tensor<f32>) {
        (
            Tensor::from_vec(vec![va], vec![1]).unwrap(),
            Tensor::from_vec(vec![vb], vec![1]).unwrap(),
        )
    }

    fn passes(va: f32, vb: f32, difference_type: DifferenceType) -> bool {
        let (a, b) = scalar_pair(va, vb);
        let options = CompareOptions::new(0.5, difference_type).with_print_errors(false);
        compare(&a, &b, &options).unwrap().passed
    }

    #[test]
    fn test_difference_policy_table() {
        use DifferenceType::*;
        // (va, vb, [Absolute, Relative, Both, Any])
        let table = [
            (1.0f32, 1.0f32, [true, true, true, true]),
            (1.0, 2.0, [false, true, true, false]),
            (10.0, 10.4, [true, true, true, true]),
        ];
        for (va, vb, expected) in table {
            for (policy, &pass) in [Absolute, Relative, Both, Any].iter().zip(expected.iter()) {
                assert_eq!(
                    passes(va, vb, *policy),
                    pass,
                    "va = {}, vb = {}, policy = {}",
                    va,
                    vb,
                    policy
                );
            }
        }
    }

    #[test]
    fn test_both_policy_requires_both_differences() {
        // absolute 2.0, relative 2/102 ~ 0.0196
        assert!(passes(100.0, 102.0, DifferenceType::Both));
        assert!(!passes(100.0, 102.0, DifferenceType::Any));
        assert!(!passes(0.0, 2.0, DifferenceType::Both));
    }

    #[test]
    fn test_differences() {
        let (abs, rel) = differences(1.0f64, 2.0);
        assert_relative_eq!(abs, 1.0);
        assert_relative_eq!(rel, 0.5);
        let (abs, rel) = differences(-3.0f32, 3.0);
        assert_relative_eq!(abs, 6.0);
        assert_relative_eq!(rel, 2.0);
    }

    #[test]
    fn test_zero_over_zero_is_zero() {
        let (abs, rel) = differences(0.0f32, 0.0);
        assert_eq!(abs, 0.0);
        assert_eq!(rel, 0.0);
        assert!(passes(0.0, 0.0, DifferenceType::Relative));
        assert!(passes(0.0, -0.0, DifferenceType::Any));
    }

    #[test]
    fn test_nan_is_not_flagged() {
        assert!(passes(f32::NAN, 1.0, DifferenceType::Any));
    }

    #[test]
    fn test_identical_tensors_pass() {
        let data: Vec<f32> = (0..24).map(|x| x as f32 * 0.25 - 3.0).collect();
        let x = Tensor::from_vec(data, vec![2, 3, 4]).unwrap();
        let sink = BufferSink::new();
        let options = CompareOptions::new(1e-6, DifferenceType::Any);
        let report = compare_with_sink(&x, &x, &options, &sink).unwrap();
        assert!(report.passed);
        assert_eq!(report.error_count, 0);
        assert_eq!(report.message, None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_equal_ones_absolute_zero_tolerance() {
        let a = Tensor::with_shape(vec![2, 3], 1.0f32).unwrap();
        let b = Tensor::with_shape(vec![2, 3], 1.0f32).unwrap();
        let result = compare_tensors(&a, &b, 0.0, false, 10, DifferenceType::Absolute, "");
        assert_eq!(result, Ok((true, 0)));
    }

    #[test]
    fn test_single_mismatch() {
        let a = Tensor::with_shape(vec![2, 3], 1.0f32).unwrap();
        let mut b = Tensor::with_shape(vec![2, 3], 1.0f32).unwrap();
        b.set(&[0, 0], 2.0).unwrap();
        let result = compare_tensors(&a, &b, 0.5, false, 10, DifferenceType::Absolute, "");
        assert_eq!(result, Ok((false, 1)));
    }

    #[test]
    fn test_report_message_format() {
        let a = Tensor::with_shape(vec![2, 3], 1.0f32).unwrap();
        let mut b = Tensor::with_shape(vec![2, 3], 1.0f32).unwrap();
        b.set(&[1, 2], 2.0).unwrap();
        let sink = BufferSink::new();
        let options = CompareOptions::new(0.5, DifferenceType::Absolute).with_description("ones");
        let report = compare_with_sink(&a, &b, &options, &sink).unwrap();
        let expected = "\nFail comparison: ones\n\
                        Error at [1, 2] : 1.000000 != 2.000000; (absolute = 1.000000, relative = 0.500000)!\n";
        assert_eq!(report.message.as_deref(), Some(expected));
        assert_eq!(sink.records(), vec![(Level::Error, expected.to_string())]);
    }

    #[test]
    fn test_sink_called_once_per_failing_comparison() {
        let a = Tensor::<f64>::zeros(vec![3, 3]).unwrap();
        let b = Tensor::with_shape(vec![3, 3], 1.0f64).unwrap();
        let sink = BufferSink::new();
        let options = CompareOptions::new(0.1, DifferenceType::Absolute).with_error_count_max(100);
        let report = compare_with_sink(&a, &b, &options, &sink).unwrap();
        assert_eq!(report.error_count, 9);
        assert_eq!(sink.len(), 1);
        let records = sink.records();
        assert_eq!(records[0].1.matches("Error at").count(), 9);
        assert_eq!(records[0].1.matches("Fail comparison").count(), 1);
        assert!(!records[0].1.contains("Stop comparison."));
    }

    #[test]
    fn test_silent_comparison_does_not_log() {
        let (a, b) = scalar_pair(1.0, 5.0);
        let sink = BufferSink::new();
        let options = CompareOptions::new(0.5, DifferenceType::Any).with_print_errors(false);
        let report = compare_with_sink(&a, &b, &options, &sink).unwrap();
        assert!(!report.passed);
        assert_eq!(report.message, None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_error_cap_stops_traversal() {
        let a = Tensor::from_vec(vec![0.0f32; 5], vec![5]).unwrap();
        let b = Tensor::from_vec(vec![1.0f32; 5], vec![5]).unwrap();
        let sink = BufferSink::new();
        let options = CompareOptions::new(0.5, DifferenceType::Absolute).with_error_count_max(2);
        let report = compare_with_sink(&a, &b, &options, &sink).unwrap();
        assert!(!report.passed);
        assert!(report.error_count >= 2);
        assert!(report.error_count <= 5);
        let message = report.message.unwrap();
        assert_eq!(message.matches("Stop comparison.").count(), 1);
    }

    #[test]
    fn test_error_cap_applies_across_axes() {
        let a = Tensor::<f32>::zeros(vec![4, 4, 4]).unwrap();
        let b = Tensor::with_shape(vec![4, 4, 4], 3.0f32).unwrap();
        let result = compare_tensors(&a, &b, 0.0, false, 3, DifferenceType::Any, "cap");
        let (passed, count) = result.unwrap();
        assert!(!passed);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_shape_mismatch_is_error() {
        let a = Tensor::<f32>::zeros(vec![2, 3]).unwrap();
        let b = Tensor::<f32>::zeros(vec![3, 2]).unwrap();
        let result = compare(&a, &b, &CompareOptions::default());
        assert_eq!(
            result,
            Err(TensorError::ShapeMismatch {
                expected: vec![3, 2],
                actual: vec![2, 3],
                operation: "compare".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_tensors_pass() {
        let a = Tensor::<f32>::new();
        let b = Tensor::<f32>::new();
        assert_eq!(
            compare_tensors(&a, &b, 0.0, true, 10, DifferenceType::Any, "empty"),
            Ok((true, 0))
        );
    }

    #[test]
    fn test_empty_and_scalar_do_not_match() {
        let empty = Tensor::<f32>::new();
        let scalar = Tensor::with_shape(vec![], 1.0f32).unwrap();
        for (a, b) in [(&scalar, &empty), (&empty, &scalar)] {
            let result = compare_tensors(a, b, 0.5, true, 10, DifferenceType::Any, "");
            assert_eq!(
                result,
                Err(TensorError::ShapeMismatch {
                    expected: vec![],
                    actual: vec![],
                    operation: "compare".to_string(),
                })
            );
        }
    }

    #[test]
    fn test_cap_reached_on_last_element_does_not_report_stop() {
        let a = Tensor::<f32>::zeros(vec![3, 3]).unwrap();
        let b = Tensor::with_shape(vec![3, 3], 1.0f32).unwrap();
        let options = CompareOptions::new(0.5, DifferenceType::Absolute).with_error_count_max(9);
        let report = compare(&a, &b, &options).unwrap();
        assert_eq!(report.error_count, 9);
        let message = report.message.unwrap();
        assert_eq!(message.matches("Error at").count(), 9);
        assert!(!message.contains("Stop comparison."));
    }

    #[test]
    fn test_cap_reached_before_outer_axis_ends_reports_stop() {
        let a = Tensor::<f32>::zeros(vec![3, 3]).unwrap();
        let b = Tensor::with_shape(vec![3, 3], 1.0f32).unwrap();
        let options = CompareOptions::new(0.5, DifferenceType::Absolute).with_error_count_max(3);
        let report = compare(&a, &b, &options).unwrap();
        assert_eq!(report.error_count, 3);
        assert!(report.message.unwrap().ends_with("Stop comparison.\n"));
    }

    #[test]
    fn test_scalar_tensors_compare_single_element() {
        let a = Tensor::with_shape(vec![], 1.0f64).unwrap();
        let b = Tensor::with_shape(vec![], 3.0f64).unwrap();
        let sink = BufferSink::new();
        let options = CompareOptions::new(0.5, DifferenceType::Absolute);
        let report = compare_with_sink(&a, &b, &options, &sink).unwrap();
        assert_eq!(report.error_count, 1);
        assert!(report.message.unwrap().contains("Error at []"));
    }

    #[test]
    fn test_extended_tensor_compares_live_elements_only() {
        let mut a = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], vec![4]).unwrap();
        a.extend(vec![2]).unwrap();
        let b = Tensor::from_vec(vec![1.0f32, 2.0], vec![2]).unwrap();
        let options = CompareOptions::new(0.0, DifferenceType::Any);
        assert!(compare(&a, &b, &options).unwrap().passed);
    }

    #[test]
    fn test_options_defaults_and_builders() {
        let options = CompareOptions::default();
        assert_eq!(options.difference_type, DifferenceType::Relative);
        assert_eq!(options.error_count_max, 32);
        assert!(options.print_errors);
        let options = options
            .with_difference_max(0.25)
            .with_difference_type(DifferenceType::Both)
            .with_description("x");
        assert_eq!(options.difference_max, 0.25);
        assert_eq!(options.difference_type, DifferenceType::Both);
        assert_eq!(options.description, "x");
    }
}
