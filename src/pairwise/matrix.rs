use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::Itertools;

use crate::Score;

/// A contiguous row-major grid of scores. Dimensions are fixed at
/// construction; both the alignment matrix and the substitution matrix are
/// stored this way.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Matrix<S: Score> {
    rows: usize,
    cols: usize,
    data: Vec<S>,
}

impl<S: Score> Matrix<S> {
    /// Allocate a rows×cols matrix filled with zeros.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![S::zero(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The backing buffer in row-major order.
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    pub fn row(&self, row: usize) -> &[S] {
        debug_assert!(row < self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl<S: Score> Index<(usize, usize)> for Matrix<S> {
    type Output = S;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<S: Score> IndexMut<(usize, usize)> for Matrix<S> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut S {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl<S: Score + fmt::Display> fmt::Display for Matrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            writeln!(f, "{}", row.iter().format("\t"))?;
        }
        Ok(())
    }
}
