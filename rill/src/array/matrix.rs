use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A dense two-dimensional array stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Create a matrix from its elements in row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::invalid_argument(
                "data",
                format!(
                    "expected {rows}x{cols} elements, got {}",
                    data.len()
                ),
            ));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Create a matrix from a list of rows, which must all have the same
    /// length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = T>,
    {
        let mut data = Vec::new();
        let mut cols = None;
        let mut count = 0;
        for row in rows {
            let before = data.len();
            data.extend(row);
            let len = data.len() - before;
            match cols {
                None => cols = Some(len),
                Some(cols) if cols != len => {
                    return Err(Error::invalid_argument(
                        "rows",
                        format!("row {count} has {len} elements, expected {cols}"),
                    ));
                }
                Some(_) => {}
            }
            count += 1;
        }
        Ok(Matrix {
            rows: count,
            cols: cols.unwrap_or(0),
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// The elements in row-major order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Rotate the matrix in place by `rotations` clockwise quarter turns;
    /// negative values turn counterclockwise.
    ///
    /// Fails with [`Error::ShapeInvalid`] unless the matrix is square.
    pub fn rotate(&mut self, rotations: isize) -> Result<()> {
        if !self.is_square() {
            return Err(Error::ShapeInvalid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for _ in 0..rotations.rem_euclid(4) {
            self.quarter_turn();
        }
        Ok(())
    }

    // One clockwise turn, ring by ring from the outside in. Every element of
    // a ring's top edge (except the last) starts a 4-cycle
    // up -> right -> down -> left -> up, done as three swaps.
    fn quarter_turn(&mut self) {
        let n = self.rows;
        for ring in 0..n / 2 {
            let last = n - ring - 1;
            for k in ring..last {
                let offset = k - ring;
                let up = self.offset(ring, k);
                let right = self.offset(k, last);
                let down = self.offset(last, last - offset);
                let left = self.offset(last - offset, ring);
                self.data.swap(up, right);
                self.data.swap(up, down);
                self.data.swap(up, left);
            }
        }
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
