// src/compare/options.rs

use std::fmt;

/// How absolute and relative element differences combine into a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifferenceType {
    /// Error iff `absolute > difference_max`.
    Absolute,
    /// Error iff `relative > difference_max`.
    #[default]
    Relative,
    /// Error iff both differences exceed `difference_max`.
    Both,
    /// Error iff either difference exceeds `difference_max`.
    Any,
}

impl DifferenceType {
    /// Classifies a pair of differences against `difference_max`.
    ///
    /// Comparisons involving NaN are false, so a NaN difference is never flagged.
    pub fn is_error(self, absolute: f64, relative: f64, difference_max: f64) -> bool {
        match self {
            DifferenceType::Absolute => absolute > difference_max,
            DifferenceType::Relative => relative > difference_max,
            DifferenceType::Both => absolute > difference_max && relative > difference_max,
            DifferenceType::Any => absolute > difference_max || relative > difference_max,
        }
    }
}

impl fmt::Display for DifferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DifferenceType::Absolute => "absolute",
            DifferenceType::Relative => "relative",
            DifferenceType::Both => "both",
            DifferenceType::Any => "any",
        };
        f.write_str(name)
    }
}

/// Configuration for one tensor comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareOptions {
    /// Tolerance applied to the absolute and/or relative difference.
    pub difference_max: f64,
    /// Accumulate diagnostics and deliver them to the sink on failure.
    pub print_errors: bool,
    /// Traversal stops once this many mismatches have been found. The report
    /// ends with `Stop comparison.` only when coordinates were actually skipped.
    pub error_count_max: usize,
    pub difference_type: DifferenceType,
    /// Echoed in the header of the failure report.
    pub description: String,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            difference_max: 0.001,
            print_errors: true,
            error_count_max: 32,
            difference_type: DifferenceType::default(),
            description: String::new(),
        }
    }
}

impl CompareOptions {
    pub fn new(difference_max: f64, difference_type: DifferenceType) -> Self {
        CompareOptions {
            difference_max,
            difference_type,
            ..Default::default()
        }
    }

    pub fn with_difference_max(mut self, difference_max: f64) -> Self {
        self.difference_max = difference_max;
        self
    }

    pub fn with_print_errors(mut self, print_errors: bool) -> Self {
        self.print_errors = print_errors;
        self
    }

    pub fn with_error_count_max(mut self, error_count_max: usize) -> Self {
        self.error_count_max = error_count_max;
        self
    }

    pub fn with_difference_type(mut self, difference_type: DifferenceType) -> Self {
        self.difference_type = difference_type;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
