//! Matrix.

use thiserror::Error;

/// A row-major matrix of conversion inputs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matrix<T> {
    /// Matrix data, row-major.
    data: Vec<T>,

    /// Number of rows.
    nrows: usize,

    /// Number of columns.
    ncols: usize,
}

impl<T> Matrix<T> {
    /// New matrix from row-major data.
    pub fn new(data: Vec<T>, nrows: usize, ncols: usize) -> Result<Matrix<T>, MatrixError> {
        let n = nrows.checked_mul(ncols).ok_or(MatrixError::Arithmetic)?;
        if n != data.len() {
            return Err(MatrixError::Build(data.len(), n));
        }
        Ok(Matrix { data, nrows, ncols })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get the matrix entry `M[row,col]`, 0-indexed.
    pub fn entry(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexNotFound);
        }
        let index = row
            .checked_mul(self.ncols)
            .and_then(|index| index.checked_add(col))
            .ok_or(MatrixError::Arithmetic)?;
        self.data.get(index).ok_or(MatrixError::IndexNotFound)
    }

    /// Iterates entries in row-major order together with their coordinates.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let ncols = self.ncols;
        self.data.iter().enumerate().map(move |(index, value)| (index / ncols, index % ncols, value))
    }
}

/// Matrix Error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum MatrixError {
    /// Index not found error.
    #[error("index not found")]
    IndexNotFound,

    /// Integer overflow or underflow.
    #[error("integer overflow/underflow")]
    Arithmetic,

    /// Error building matrix.
    #[error("error building matrix, given data has {0} entries which does not match nrows x ncols = {1}")]
    Build(usize, usize),
}
