// src/tensor/debug.rs
use crate::tensor::Tensor;
use crate::types::Element;
use std::fmt;
use std::io::{self, Write};

/// Formatting configuration for [`Tensor::debug_print_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Leading coordinates printed along the innermost axis.
    pub first: usize,
    /// Trailing coordinates printed along the innermost axis.
    pub last: usize,
    /// Fractional digits in fixed-point output.
    pub precision: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            first: 5,
            last: 2,
            precision: 4,
        }
    }
}

impl PrintOptions {
    pub fn with_first(mut self, first: usize) -> Self {
        self.first = first;
        self
    }

    pub fn with_last(mut self, last: usize) -> Self {
        self.last = last;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

// Per-axis print limits, innermost axis last.
struct AxisLayout {
    firsts: Vec<usize>,
    lasts: Vec<usize>,
    separators: Vec<String>,
}

impl AxisLayout {
    // Each axis one level further out prints one coordinate fewer (at least
    // one) and gets one extra line break in its separator.
    fn new(rank: usize, options: &PrintOptions) -> Self {
        let mut firsts = vec![0; rank];
        let mut lasts = vec![0; rank];
        let mut separators = vec![String::new(); rank];
        for axis in (0..rank).rev() {
            if axis + 1 == rank {
                firsts[axis] = options.first;
                lasts[axis] = options.last;
                separators[axis] = "\t".to_string();
            } else {
                firsts[axis] = firsts[axis + 1].saturating_sub(1).max(1);
                lasts[axis] = lasts[axis + 1].saturating_sub(1).max(1);
                separators[axis] = format!("{}\n", separators[axis + 1]);
            }
        }
        AxisLayout {
            firsts,
            lasts,
            separators,
        }
    }
}

impl<T: Element> Tensor<T> {
    /// Writes a truncated dump of the tensor with the default [`PrintOptions`].
    pub fn debug_print<W: Write + ?Sized>(&self, out: &mut W, name: &str) -> io::Result<()> {
        self.debug_print_with(out, name, &PrintOptions::default())
    }

    /// Writes the shape header, then a depth-first dump of the contents.
    ///
    /// Along each axis only `first` leading and `last` trailing coordinates
    /// are printed (with `...` between) when the extent exceeds their sum.
    pub fn debug_print_with<W: Write + ?Sized>(
        &self,
        out: &mut W,
        name: &str,
        options: &PrintOptions,
    ) -> io::Result<()> {
        write!(out, "{} {{ ", name)?;
        for extent in &self.shape {
            write!(out, "{} ", extent)?;
        }
        writeln!(out, "}} ")?;

        if self.size == 0 {
            return Ok(());
        }

        let rank = self.rank();
        let layout = AxisLayout::new(rank, options);
        let mut index = vec![0usize; rank];
        self.print_axis(out, &layout, options.precision, &mut index, 0)?;
        if rank <= 1 {
            writeln!(out)?;
        }
        Ok(())
    }

    fn print_axis<W: Write + ?Sized>(
        &self,
        out: &mut W,
        layout: &AxisLayout,
        precision: usize,
        index: &mut [usize],
        depth: usize,
    ) -> io::Result<()> {
        if depth == self.rank() {
            let offset = self
                .offset(index)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            return write!(out, "{:.*}", precision, self.data[offset]);
        }
        let extent = self.shape[depth];
        let separator = &layout.separators[depth];
        let (first, last) = (layout.firsts[depth], layout.lasts[depth]);
        if first + last < extent {
            for coord in 0..first {
                index[depth] = coord;
                self.print_axis(out, layout, precision, index, depth + 1)?;
                out.write_all(separator.as_bytes())?;
            }
            write!(out, "...{}", separator)?;
            for coord in extent - last..extent {
                index[depth] = coord;
                self.print_axis(out, layout, precision, index, depth + 1)?;
                out.write_all(separator.as_bytes())?;
            }
        } else {
            for coord in 0..extent {
                index[depth] = coord;
                self.print_axis(out, layout, precision, index, depth + 1)?;
                out.write_all(separator.as_bytes())?;
            }
        }
        Ok(())
    }
}

// Manual implementation of Debug trait; contents are left to `debug_print`.
impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(shape={:?}, size={}, capacity={})",
            self.shape,
            self.size,
            self.data.len()
        )
    }
}

#[cfg(test)]
#[path = "debug_test.rs"]
mod tests;
