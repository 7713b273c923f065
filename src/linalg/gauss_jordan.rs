/* ************************************************************************ **
** This file is part of rsp2, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of rsp2 is provided under this permissive license, **
** and that the project as a whole is licensed under the GPL 3.0.           **
** ************************************************************************ */

//! Gauss-Jordan elimination with partial pivoting.
//!
//! Everything here works in place on [`Matrix`] views; the "working matrix"
//! of each step is just a smaller view of the caller's buffer.
//!
//! [`Matrix`]: ../rsp2_matrix/struct.Matrix.html

use crate::EliminationError;

use ::itertools::Itertools;
use ::rsp2_matrix::Matrix;

/// Move the row with the largest `|a[i, 0]|` to the top.
///
/// Ties go to the earliest row, so nothing moves unless a later row is
/// *strictly* larger.
///
/// Returns the index that the chosen row had **before** it was swapped into
/// row 0.  (so `0` means nothing moved)
///
/// Fails with `IndexRange` if the matrix has no rows or no columns.
pub fn select_pivot(a: &Matrix) -> Result<usize, EliminationError>
{
    if a.is_empty() {
        return Err(EliminationError::IndexRange { dims: a.dims() });
    }

    let mut cursor = a.col_begin(0);
    let mut pivot = cursor.post_inc().get().abs();
    let mut pivot_row = 0;
    for i in 1..a.nr() {
        let value = cursor.post_inc().get().abs();
        if value > pivot {
            pivot = value;
            pivot_row = i;
        }
    }

    if pivot_row != 0 {
        a.row_swap(0, pivot_row);
    }
    Ok(pivot_row)
}

/// Reduce `a` in place towards unit upper triangular (row echelon) form.
///
/// Each step picks a pivot for the leading column, scales the pivot row so
/// that the pivot becomes 1, eliminates the leading column from all rows
/// below, and then moves on to the submatrix without the first row and
/// column.
///
/// Returns the number of rows that were successfully reduced.  This is
/// `a.nr()` if the process ran out of rows or columns, and less than that if
/// it stopped at a pivot of exactly zero.  Stopping early is not an error
/// here; see [`solve_gj`] for something that treats it as one.
///
/// [`solve_gj`]: fn.solve_gj.html
pub fn transform_uut(a: &Matrix) -> Result<usize, EliminationError>
{
    let mut work = a.clone();
    let mut rank = 0;
    while !work.is_empty() {
        let from_row = select_pivot(&work)?;
        let pivot = work.get(0, 0);
        trace!("UUT step {}: pivot {:e} (from working row {})", rank, pivot, from_row);
        if pivot == 0.0 {
            debug!("UUT stalled at row {} of {}", rank, a.nr());
            break;
        }

        work.row(0)?.div_scalar(pivot);
        for i in 1..work.nr() {
            let factor = work.get(i, 0);
            for (dest, top) in work.row_iter(i).zip_eq(work.row_iter(0)) {
                dest.set(dest.get() - factor * top.get());
            }
        }
        rank += 1;

        let rest = work.slice_from(1)?;
        work.reset(&rest);
    }
    Ok(rank)
}

/// Solve `a x = b` in place for unit upper triangular `a`, leaving `x` in `b`.
///
/// `b` may have any number of columns.  Only the strict upper triangle of
/// `a` is read; the diagonal is assumed to be all ones.  As each row of `a`
/// is consumed, its strict upper triangle is zeroed, so that on return `a`
/// is the identity (if it was unit upper triangular to begin with).
///
/// Fails with `Domain` if `a` is not square and `InvalidArgument` if the
/// row counts of `a` and `b` disagree.
pub fn solve_uut(a: &Matrix, b: &Matrix) -> Result<(), EliminationError>
{
    if !a.is_square() {
        return Err(EliminationError::Domain {
            what: "solving a non-square system",
            dims: a.dims(),
        });
    }
    if a.nr() != b.nr() {
        return Err(EliminationError::InvalidArgument { a_rows: a.nr(), b_rows: b.nr() });
    }

    let n = a.nr();
    // Row n-1 is already solved.  Each iteration resolves one more row,
    // working upwards.
    for k in 1..n {
        let row = n - k - 1;
        let coeffs = a.slice(row, row + 1, row + 1, n)?;
        let solved = b.row_slice_from(row + 1)?;
        b.row(row)?.sub_assign_from(&coeffs.matmul(&solved)?)?;
        coeffs.fill(0.0);
    }
    Ok(())
}

/// Solve a linear system in place by Gauss-Jordan elimination.
///
/// `ab` is an augmented matrix `[A | B]`, where `A` is the leftmost square
/// block.  On success, `A` is overwritten with the identity and `B` with the
/// solution `X` of `A X = B`.  (`B` may have any number of columns,
/// including zero)
///
/// Fails with `Domain` if `ab` has more rows than columns, and with
/// `Singular` if elimination could not find a nonzero pivot for some row.
/// In the latter case, `ab` is left partially reduced.
pub fn solve_gj(ab: &Matrix) -> Result<(), EliminationError>
{
    if ab.nr() > ab.nc() {
        return Err(EliminationError::Domain {
            what: "augmented matrix has more rows than columns",
            dims: ab.dims(),
        });
    }

    let n = ab.nr();
    let rank = transform_uut(ab)?;
    if rank != n {
        debug!("system of {} equations is singular (rank {})", n, rank);
        return Err(EliminationError::Singular { row: rank });
    }

    solve_uut(&ab.col_slice(0, n)?, &ab.col_slice_from(n)?)
}
