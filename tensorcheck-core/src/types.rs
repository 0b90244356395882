use num_traits::{Float, Zero};
use std::fmt::{Debug, Display};

/// Ordered per-axis extents, outermost axis first.
pub type Shape = Vec<usize>;

/// Per-axis coordinates into a tensor of matching rank.
pub type Index = Vec<usize>;

/// Element types a [`Tensor`](crate::Tensor) can store.
///
/// `Zero` provides the default fill value; `Display` is used by the debug
/// printer.
pub trait Element: Zero + Copy + PartialOrd + Debug + Display + Send + Sync + 'static {}

impl Element for f32 {}
impl Element for f64 {}
impl Element for i8 {}
impl Element for i16 {}
impl Element for i32 {}
impl Element for i64 {}
impl Element for u8 {}
impl Element for u16 {}
impl Element for u32 {}
impl Element for u64 {}

/// Floating-point elements, required by the comparator for absolute and
/// relative differences.
pub trait FloatElement: Element + Float {}

impl FloatElement for f32 {}
impl FloatElement for f64 {}
