//! Matrix conversions.

use crate::{
    arena::{Arena, ObjRef},
    convert::{integer::write_small, rational::write_rational},
    errors::Interrupted,
    matrix::Matrix,
    object,
    small::SmallInt,
};
use num_rational::BigRational;

/// Builds a heap matrix from a matrix of fixed-width integers.
///
/// With `rotate`, the output has transposed shape and input cell `(i, j)`
/// lands at output cell `(cols - 1 - j, i)`: a 90 degree counter-clockwise
/// rotation that reconciles the two libraries' canonical-form row/column
/// conventions. One allocation span covers the whole build.
pub fn from_int_matrix(
    arena: &mut Arena,
    matrix: &Matrix<SmallInt>,
    rotate: bool,
) -> Result<ObjRef, Interrupted> {
    let (rows, cols) = (matrix.nrows(), matrix.ncols());
    let mut span = arena.begin();
    let shell = if rotate {
        object::write_mat_shell(&mut span, cols, rows)?
    } else {
        object::write_mat_shell(&mut span, rows, cols)?
    };
    for (i, j, value) in matrix.entries() {
        let cell = write_small(&mut span, value)?;
        let (row, col) = if rotate { (cols - 1 - j, i) } else { (i, j) };
        object::set_mat_cell(&mut span, shell, row, col, cell);
    }
    span.commit();
    Ok(shell)
}

/// Builds a heap matrix from a matrix of big rationals.
///
/// Entries go through the rational path, so integral entries land as plain
/// heap integers. No rotation variant exists for rationals.
pub fn from_rational_matrix(
    arena: &mut Arena,
    matrix: &Matrix<BigRational>,
) -> Result<ObjRef, Interrupted> {
    let mut span = arena.begin();
    let shell = object::write_mat_shell(&mut span, matrix.nrows(), matrix.ncols())?;
    for (i, j, value) in matrix.entries() {
        let cell = write_rational(&mut span, value)?;
        object::set_mat_cell(&mut span, shell, i, j, cell);
    }
    span.commit();
    Ok(shell)
}
