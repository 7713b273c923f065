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

use crate::{Axis, MatrixError, StepCursor, StepIter};

use ::std::cell::Cell;
use ::std::fmt;
use ::std::rc::Rc;
use ::itertools::Itertools;

/// Largest permitted number of rows or columns.
///
/// Chosen so that `NMAX * NMAX * size_of::<f64>()` plus a refcount header
/// comfortably fits in the size computations of any 64-bit allocator.
pub const NMAX: usize = (1 << 14) - 1;

/// A strided view into a shared, reference-counted buffer of `f64`.
///
/// Every `Matrix` is a view; there is no separate owned type.  A fresh buffer
/// is allocated by [`Matrix::new`] (and by the operations that produce new
/// data such as [`copy`], negation or matrix products), while [`Clone`],
/// slicing and [`t`] only produce more views of an existing buffer.  The
/// buffer is freed when the last view onto it is dropped.
///
/// Elements can be written through *any* view, even through `&Matrix`.
/// This is what lets a slice act as a handle for modifying part of a larger
/// matrix:
///
/// ```
/// # use rsp2_matrix::Matrix;
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
/// m.col(1)?.fill(0.0);
/// assert_eq!(m.to_rows(), vec![vec![1.0, 0.0], vec![3.0, 0.0]]);
/// # Ok::<(), rsp2_matrix::MatrixError>(())
/// ```
///
/// Since the buffer is shared through an `Rc`, a `Matrix` cannot be sent to
/// another thread.
///
/// [`Matrix::new`]: #method.new
/// [`copy`]: #method.copy
/// [`t`]: #method.t
/// [`Clone`]: #impl-Clone
#[derive(Clone)]
pub struct Matrix {
    buf: Rc<[Cell<f64>]>,
    // index into buf of element (0, 0)
    offset: usize,
    // (nrow, ncol)
    dims: (usize, usize),
    // (srow, scol), in elements
    strides: (usize, usize),
}

// ---------------------------------------------------------------------------
// construction

impl Matrix {
    /// Allocate a new zero-filled matrix with C layout.
    ///
    /// Fails with `OutOfRange` if either dimension exceeds [`NMAX`], and with
    /// `AllocationFailure` if the buffer cannot be reserved.
    ///
    /// [`NMAX`]: constant.NMAX.html
    pub fn new(nrow: usize, ncol: usize) -> Result<Matrix, MatrixError>
    {
        check_dim(Axis::Row, nrow)?;
        check_dim(Axis::Col, ncol)?;

        let len = nrow * ncol;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::AllocationFailure { len })?;
        data.resize_with(len, || Cell::new(0.0));

        Ok(Matrix::from_buffer(data.into(), (nrow, ncol)))
    }

    /// Alias of [`Matrix::new`], for call sites that care that the data is zero.
    ///
    /// [`Matrix::new`]: #method.new
    pub fn zeros(nrow: usize, ncol: usize) -> Result<Matrix, MatrixError>
    { Matrix::new(nrow, ncol) }

    /// Allocate an `nrow x ncol` matrix and fill it from nested rows.
    pub fn with_rows<R: AsRef<[f64]>>(nrow: usize, ncol: usize, rows: &[R]) -> Result<Matrix, MatrixError>
    {
        let matrix = Matrix::new(nrow, ncol)?;
        matrix.assign_rows(rows)?;
        Ok(matrix)
    }

    /// Build a matrix from rectangular nested data.
    ///
    /// The column count is taken from the first row, so an empty slice
    /// produces a `0x0` matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Matrix, MatrixError>
    {
        let ncol = rows.first().map_or(0, |row| row.as_ref().len());
        Matrix::with_rows(rows.len(), ncol, rows)
    }

    // For results of operations on existing matrices, whose dims are already
    // known to be valid.  Allocation failure aborts, like `Vec::clone`.
    pub(crate) fn zeros_like_dims((nrow, ncol): (usize, usize)) -> Matrix
    {
        debug_assert!(nrow <= NMAX && ncol <= NMAX);
        Matrix::from_buffer(vec![Cell::new(0.0); nrow * ncol].into(), (nrow, ncol))
    }

    fn from_buffer(buf: Rc<[Cell<f64>]>, (nrow, ncol): (usize, usize)) -> Matrix
    {
        debug_assert_eq!(buf.len(), nrow * ncol);
        Matrix {
            buf,
            offset: 0,
            dims: (nrow, ncol),
            strides: (ncol, 1),
        }
    }
}

fn check_dim(axis: Axis, n: usize) -> Result<(), MatrixError>
{
    match n <= NMAX {
        true => Ok(()),
        false => Err(MatrixError::OutOfRange { axis, index: n, limit: NMAX }),
    }
}

// ---------------------------------------------------------------------------
// reference semantics

impl Matrix {
    /// Rebind this view to alias `other`.
    ///
    /// This is "assignment by reference"; compare to [`assign`], which copies
    /// values.  If the old buffer loses its last view, it is freed.
    ///
    /// [`assign`]: #method.assign
    pub fn reset(&mut self, other: &Matrix)
    {
        if self.shares_buffer(other) {
            // same buffer; only the geometry changes
            self.offset = other.offset;
            self.dims = other.dims;
            self.strides = other.strides;
        } else {
            *self = other.clone();
        }
    }

    /// Number of views currently alive on this matrix's buffer.
    pub fn ref_count(&self) -> usize
    { Rc::strong_count(&self.buf) }

    /// Whether the two views live on the same buffer.
    pub fn shares_buffer(&self, other: &Matrix) -> bool
    { Rc::ptr_eq(&self.buf, &other.buf) }

    /// Deep copy into a fresh C-layout buffer.
    pub fn copy(&self) -> Matrix
    {
        let out = Matrix::zeros_like_dims(self.dims);
        self.zip_rows_with(&out, |src, dest| dest.set(src.get()));
        out
    }
}

// ---------------------------------------------------------------------------
// value semantics

impl Matrix {
    /// Copy the values of `other` into the elements of this view.
    ///
    /// The shapes must match.  Both sides are walked in the same order, so
    /// this is fine even when `self` and `other` alias each other.
    pub fn assign(&self, other: &Matrix) -> Result<(), MatrixError>
    {
        self.check_same_dims(other)?;
        other.zip_rows_with(self, |src, dest| dest.set(src.get()));
        Ok(())
    }

    /// Copy nested row data into the elements of this view.
    pub fn assign_rows<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<(), MatrixError>
    {
        if rows.len() != self.nr() {
            let ncol = rows.first().map_or(0, |row| row.as_ref().len());
            return Err(self.shape_mismatch((rows.len(), ncol)));
        }
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != self.nc() {
                return Err(self.shape_mismatch((rows.len(), row.len())));
            }
            for (dest, &value) in self.row_iter(i).zip_eq(row) {
                dest.set(value);
            }
        }
        Ok(())
    }

    /// Set every element of this view to `value`.
    pub fn fill(&self, value: f64)
    {
        for i in 0..self.nr() {
            for cell in self.row_iter(i) {
                cell.set(value);
            }
        }
    }

    /// Read the whole view into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>>
    {
        (0..self.nr())
            .map(|i| self.row_iter(i).map(Cell::get).collect())
            .collect()
    }

    pub(crate) fn check_same_dims(&self, other: &Matrix) -> Result<(), MatrixError>
    {
        match self.dims == other.dims {
            true => Ok(()),
            false => Err(self.shape_mismatch(other.dims)),
        }
    }

    pub(crate) fn shape_mismatch(&self, other: (usize, usize)) -> MatrixError
    { MatrixError::ShapeMismatch { left: self.dims, right: other } }

    /// Walk the rows of `self` and `other` in lockstep.  Dims must match.
    pub(crate) fn zip_rows_with(&self, other: &Matrix, mut func: impl FnMut(&Cell<f64>, &Cell<f64>))
    {
        debug_assert_eq!(self.dims, other.dims);
        for i in 0..self.nr() {
            for (a, b) in self.row_iter(i).zip_eq(other.row_iter(i)) {
                func(a, b);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// geometry

impl Matrix {
    pub fn nr(&self) -> usize { self.dims.0 }
    pub fn nc(&self) -> usize { self.dims.1 }
    pub fn dims(&self) -> (usize, usize) { self.dims }
    pub fn strides(&self) -> (usize, usize) { self.strides }
    pub fn row_stride(&self) -> usize { self.strides.0 }
    pub fn col_stride(&self) -> usize { self.strides.1 }
    pub fn is_empty(&self) -> bool { self.dims.0 == 0 || self.dims.1 == 0 }
    pub fn is_square(&self) -> bool { self.dims.0 == self.dims.1 }
    pub fn size(&self) -> usize { self.dims.0 * self.dims.1 }
}

// ---------------------------------------------------------------------------
// element access
//
// None of these check `i < nr()` or `j < nc()`.  Reading outside of the view
// but inside of the buffer silently reads a neighbor; reading outside of the
// buffer panics.

impl Matrix {
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> &Cell<f64>
    { &self.buf[self.offset + i * self.strides.0 + j * self.strides.1] }

    #[inline] pub fn get(&self, i: usize, j: usize) -> f64 { self.at(i, j).get() }
    #[inline] pub fn set(&self, i: usize, j: usize, value: f64) { self.at(i, j).set(value) }

    #[inline]
    pub fn row_begin(&self, i: usize) -> StepCursor<'_>
    { StepCursor::new(&self.buf, self.offset + i * self.strides.0, self.strides.1) }

    #[inline]
    pub fn row_end(&self, i: usize) -> StepCursor<'_>
    { self.row_begin(i) + self.dims.1 as isize }

    #[inline]
    pub fn col_begin(&self, j: usize) -> StepCursor<'_>
    { StepCursor::new(&self.buf, self.offset + j * self.strides.1, self.strides.0) }

    #[inline]
    pub fn col_end(&self, j: usize) -> StepCursor<'_>
    { self.col_begin(j) + self.dims.0 as isize }

    /// Same as `row_begin`; `m.row_cursor(i).at(j)` is element `(i, j)`.
    #[inline]
    pub fn row_cursor(&self, i: usize) -> StepCursor<'_>
    { self.row_begin(i) }

    pub fn row_iter(&self, i: usize) -> StepIter<'_>
    { StepIter::new(self.row_begin(i), self.dims.1) }

    pub fn col_iter(&self, j: usize) -> StepIter<'_>
    { StepIter::new(self.col_begin(j), self.dims.0) }
}

// ---------------------------------------------------------------------------
// slicing

impl Matrix {
    /// View of rows `i1..i2` and columns `j1..j2`, sharing this buffer.
    ///
    /// Fails with `InvalidArgument` if an interval is backwards, and with
    /// `OutOfRange` if it reaches past the edge of this view.
    pub fn slice(&self, i1: usize, i2: usize, j1: usize, j2: usize) -> Result<Matrix, MatrixError>
    {
        check_interval(Axis::Row, i1, i2)?;
        check_interval(Axis::Col, j1, j2)?;
        check_bound(Axis::Row, i2, self.nr())?;
        check_bound(Axis::Col, j2, self.nc())?;

        Ok(Matrix {
            buf: self.buf.clone(),
            offset: self.offset + i1 * self.strides.0 + j1 * self.strides.1,
            dims: (i2 - i1, j2 - j1),
            strides: self.strides,
        })
    }

    pub fn row_slice(&self, i1: usize, i2: usize) -> Result<Matrix, MatrixError>
    { self.slice(i1, i2, 0, self.nc()) }

    pub fn col_slice(&self, j1: usize, j2: usize) -> Result<Matrix, MatrixError>
    { self.slice(0, self.nr(), j1, j2) }

    pub fn row_slice_from(&self, i1: usize) -> Result<Matrix, MatrixError>
    { self.row_slice(i1, self.nr()) }

    pub fn col_slice_from(&self, j1: usize) -> Result<Matrix, MatrixError>
    { self.col_slice(j1, self.nc()) }

    /// Slice rows and columns by the same interval.
    pub fn slice_diag(&self, ij1: usize, ij2: usize) -> Result<Matrix, MatrixError>
    { self.slice(ij1, ij2, ij1, ij2) }

    /// Drop the first `ij1` rows and the first `ij1` columns.
    pub fn slice_from(&self, ij1: usize) -> Result<Matrix, MatrixError>
    { self.slice(ij1, self.nr(), ij1, self.nc()) }

    // saturating, so that a huge index reports `OutOfRange` instead of overflowing
    pub fn row(&self, i: usize) -> Result<Matrix, MatrixError>
    { self.row_slice(i, i.saturating_add(1)) }

    pub fn col(&self, j: usize) -> Result<Matrix, MatrixError>
    { self.col_slice(j, j.saturating_add(1)) }

    /// Transposed view of the same buffer.
    pub fn t(&self) -> Matrix
    {
        let Matrix { ref buf, offset, dims, strides } = *self;
        Matrix {
            buf: buf.clone(),
            offset,
            dims: (dims.1, dims.0),
            strides: (strides.1, strides.0),
        }
    }
}

fn check_interval(axis: Axis, start: usize, end: usize) -> Result<(), MatrixError>
{
    match start <= end {
        true => Ok(()),
        false => Err(MatrixError::InvalidArgument { axis, start, end }),
    }
}

fn check_bound(axis: Axis, end: usize, len: usize) -> Result<(), MatrixError>
{
    match end <= len {
        true => Ok(()),
        false => Err(MatrixError::OutOfRange { axis, index: end, limit: len }),
    }
}

// ---------------------------------------------------------------------------
// swaps

impl Matrix {
    /// Exchange rows `i1` and `i2` in place.
    pub fn row_swap(&self, i1: usize, i2: usize)
    {
        debug_assert!(i1 < self.nr() && i2 < self.nr());
        // `Cell::swap` is a no-op when both sides are the same cell, so each
        // position is handled independently no matter how the rows overlap.
        for (a, b) in self.row_iter(i1).zip_eq(self.row_iter(i2)) {
            a.swap(b);
        }
    }

    /// Exchange columns `j1` and `j2` in place.
    pub fn col_swap(&self, j1: usize, j2: usize)
    {
        debug_assert!(j1 < self.nc() && j2 < self.nc());
        for (a, b) in self.col_iter(j1).zip_eq(self.col_iter(j2)) {
            a.swap(b);
        }
    }
}

// ---------------------------------------------------------------------------

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Matrix")
            .field("dims", &self.dims)
            .field("strides", &self.strides)
            .field("offset", &self.offset)
            .field("rows", &self.to_rows())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::pretty_assertions::assert_eq;

    fn get_3_3() -> Matrix
    { Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap() }

    fn check_fresh(m: &Matrix, dims: (usize, usize))
    {
        assert_eq!(m.ref_count(), 1);
        assert_eq!(m.offset, 0);
        assert_eq!(m.dims(), dims);
        assert_eq!(m.strides(), (dims.1, 1));
        assert_eq!(m.buf.len(), dims.0 * dims.1);
    }

    #[test]
    fn nmax_is_small_enough() {
        let n = NMAX as u64;
        assert!(n < (1 << 32));
        let header = ::std::mem::size_of::<usize>() as u64;
        let scalar = ::std::mem::size_of::<f64>() as u64;
        assert!(n * n <= (!header) / scalar);
    }

    #[test]
    fn construction_limits() {
        check_fresh(&Matrix::new(0, 0).unwrap(), (0, 0));
        check_fresh(&Matrix::new(0, NMAX).unwrap(), (0, NMAX));
        check_fresh(&Matrix::new(NMAX, 0).unwrap(), (NMAX, 0));
        check_fresh(&Matrix::new(3, 7).unwrap(), (3, 7));

        assert_eq!(
            Matrix::new(NMAX + 1, 0).unwrap_err(),
            MatrixError::OutOfRange { axis: Axis::Row, index: NMAX + 1, limit: NMAX },
        );
        assert_eq!(
            Matrix::new(0, NMAX + 1).unwrap_err(),
            MatrixError::OutOfRange { axis: Axis::Col, index: NMAX + 1, limit: NMAX },
        );
        match Matrix::new(NMAX + 1, NMAX + 1) {
            Err(MatrixError::OutOfRange { .. }) => {},
            r => panic!("{:?}", r),
        }
    }

    #[test]
    fn new_is_zeroed() {
        let m = Matrix::new(2, 3).unwrap();
        assert_eq!(m.to_rows(), vec![vec![0.0; 3]; 2]);
    }

    #[test]
    fn clone_counts_references() {
        let matrix = Matrix::new(0, 0).unwrap();
        let mut matrices = ::std::collections::VecDeque::new();
        for i in 1..32 {
            matrices.push_back(matrix.clone());
            assert_eq!(matrix.ref_count(), i + 1);
        }
        for i in (1..32).rev() {
            matrices.pop_front();
            assert_eq!(matrix.ref_count(), i);
        }
    }

    #[test]
    fn reset() {
        let mut a = get_3_3();
        let b = a.clone();
        assert!(a.shares_buffer(&b));
        assert_eq!(a.ref_count(), 2);

        let a_copy = a.clone();
        a.reset(&a_copy);
        drop(a_copy);
        assert!(a.shares_buffer(&b));
        assert_eq!(a.ref_count(), 2);

        a.reset(&get_3_3());
        assert!(!a.shares_buffer(&b));
        assert_eq!(a.ref_count(), 1);
        assert_eq!(b.ref_count(), 1);

        a.reset(&b);
        assert!(a.shares_buffer(&b));
        assert_eq!(a.ref_count(), 2);
    }

    #[test]
    fn reset_within_buffer_changes_geometry() {
        let mut a = get_3_3();
        let keep = a.clone();
        let sub = a.slice_from(1).unwrap();
        a.reset(&sub);
        drop(sub);
        assert_eq!(a.ref_count(), 2);
        assert_eq!(a.dims(), (2, 2));
        assert_eq!(a.to_rows(), vec![vec![5.0, 6.0], vec![8.0, 9.0]]);
        assert_eq!(keep.dims(), (3, 3));
    }

    #[test]
    fn assign() {
        Matrix::new(0, 0).unwrap().assign(&Matrix::new(0, 0).unwrap()).unwrap();

        let shape_err = |a: (usize, usize), b: (usize, usize)| {
            let left = Matrix::new(a.0, a.1).unwrap();
            let right = Matrix::new(b.0, b.1).unwrap();
            left.assign(&right).unwrap_err()
        };
        assert_eq!(shape_err((1, 2), (3, 2)), MatrixError::ShapeMismatch { left: (1, 2), right: (3, 2) });
        assert_eq!(shape_err((1, 2), (1, 3)), MatrixError::ShapeMismatch { left: (1, 2), right: (1, 3) });
        assert_eq!(shape_err((1, 2), (3, 4)), MatrixError::ShapeMismatch { left: (1, 2), right: (3, 4) });

        let a = get_3_3();
        let b = Matrix::new(3, 3).unwrap();
        b.assign(&a).unwrap();
        assert!(!a.shares_buffer(&b));
        assert_eq!(a, b);

        // through a view with different strides
        let c = Matrix::new(3, 3).unwrap();
        c.t().assign(&a).unwrap();
        assert_eq!(c.t(), a);
    }

    #[test]
    fn assign_to_self_and_overlap() {
        let a = get_3_3();
        a.assign(&a.clone()).unwrap();
        assert_eq!(a, get_3_3());

        // transpose-on-self: each position is read right before it is written,
        // so the upper triangle gets mirrored onto the lower.
        a.assign(&a.t()).unwrap();
        assert_eq!(a.to_rows(), vec![
            vec![1.0, 4.0, 7.0],
            vec![4.0, 5.0, 8.0],
            vec![7.0, 8.0, 9.0],
        ]);
    }

    #[test]
    fn assign_rows() {
        let m = Matrix::new(2, 2).unwrap();
        m.assign_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

        assert_eq!(
            m.assign_rows(&[[1.0, 2.0]]).unwrap_err(),
            MatrixError::ShapeMismatch { left: (2, 2), right: (1, 2) },
        );
        assert_eq!(
            m.assign_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err(),
            MatrixError::ShapeMismatch { left: (2, 2), right: (2, 1) },
        );
        assert_eq!(Matrix::from_rows::<[f64; 0]>(&[]).unwrap().dims(), (0, 0));
        assert_eq!(Matrix::with_rows::<[f64; 0]>(0, 4, &[]).unwrap().dims(), (0, 4));
    }

    #[test]
    fn copy_is_independent() {
        let a = get_3_3();
        let b = a.copy();
        assert!(!a.shares_buffer(&b));
        assert_eq!(a.ref_count(), 1);
        assert_eq!(b.ref_count(), 1);
        assert_eq!(a, b);

        b.set(0, 0, 100.0);
        assert_eq!(a.get(0, 0), 1.0);
        a.set(2, 2, -100.0);
        assert_eq!(b.get(2, 2), 9.0);

        // copies of strided views come out in C layout
        let c = a.t().col_slice_from(1).unwrap().copy();
        assert_eq!(c.strides(), (2, 1));
        assert_eq!(c.to_rows(), vec![vec![4.0, 7.0], vec![5.0, 8.0], vec![6.0, -100.0]]);
    }

    #[test]
    fn element_layout() {
        let (nrow, ncol) = (16, 64);
        let matrix = Matrix::new(nrow, ncol).unwrap();
        let base = matrix.at(0, 0) as *const Cell<f64>;
        for i in 0..nrow {
            let mut iter = matrix.row_begin(i);
            for j in 0..ncol {
                let expected = unsafe { base.add(i * ncol + j) };
                assert!(::std::ptr::eq(matrix.at(i, j), expected));
                assert!(::std::ptr::eq(matrix.row_cursor(i).at(j as isize), expected));
                assert!(iter < matrix.row_end(i));
                assert!(::std::ptr::eq(iter.cell(), expected));
                iter.inc();
            }
            assert_eq!(iter, matrix.row_end(i));
        }
        for j in 0..ncol {
            let mut iter = matrix.col_begin(j);
            for i in 0..nrow {
                assert!(iter < matrix.col_end(j));
                assert!(::std::ptr::eq(iter.cell(), matrix.at(i, j)));
                iter.inc();
            }
            assert_eq!(iter, matrix.col_end(j));
        }
    }

    #[test]
    fn slice_validation() {
        let a = get_3_3();
        for i1 in 0..=a.nr() + 1 {
        for i2 in 0..=a.nr() + 1 {
        for j1 in 0..=a.nc() + 1 {
        for j2 in 0..=a.nc() + 1 {
            let result = a.slice(i1, i2, j1, j2);
            if i1 > i2 || j1 > j2 {
                match result {
                    Err(MatrixError::InvalidArgument { .. }) => continue,
                    r => panic!("{:?}", r),
                }
            }
            if i2 > a.nr() || j2 > a.nc() {
                match result {
                    Err(MatrixError::OutOfRange { .. }) => continue,
                    r => panic!("{:?}", r),
                }
            }
            let sub = result.unwrap();
            assert!(sub.shares_buffer(&a));
            assert_eq!(sub.dims(), (i2 - i1, j2 - j1));
            if !sub.is_empty() {
                assert!(::std::ptr::eq(sub.at(0, 0), a.at(i1, j1)));
            }
            assert_eq!(sub, a.row_slice(i1, i2).unwrap().col_slice(j1, j2).unwrap());
            assert_eq!(sub, a.col_slice(j1, j2).unwrap().row_slice(i1, i2).unwrap());
        }}}}
    }

    #[test]
    fn row_slice_errors() {
        let a = get_3_3();
        assert_eq!(
            a.row_slice(2, 1).unwrap_err(),
            MatrixError::InvalidArgument { axis: Axis::Row, start: 2, end: 1 },
        );
        assert_eq!(
            a.row_slice(1, 4).unwrap_err(),
            MatrixError::OutOfRange { axis: Axis::Row, index: 4, limit: 3 },
        );
        assert_eq!(
            a.col_slice(0, 5).unwrap_err(),
            MatrixError::OutOfRange { axis: Axis::Col, index: 5, limit: 3 },
        );
        // backwards interval is reported before the out-of-range one
        assert_eq!(
            a.slice(5, 4, 0, 1).unwrap_err(),
            MatrixError::InvalidArgument { axis: Axis::Row, start: 5, end: 4 },
        );
        assert_eq!(a.row(3).unwrap_err(), MatrixError::OutOfRange { axis: Axis::Row, index: 4, limit: 3 });
    }

    #[test]
    fn one_argument_slices() {
        let a = get_3_3();
        assert_eq!(a.row_slice_from(1).unwrap().to_rows(), vec![vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]);
        assert_eq!(a.col_slice_from(2).unwrap().to_rows(), vec![vec![3.0], vec![6.0], vec![9.0]]);
        assert_eq!(a.slice_from(2).unwrap().to_rows(), vec![vec![9.0]]);
        assert_eq!(a.slice_diag(0, 2).unwrap().to_rows(), vec![vec![1.0, 2.0], vec![4.0, 5.0]]);
        assert_eq!(a.slice_from(3).unwrap().dims(), (0, 0));
        assert_eq!(a.row(1).unwrap().to_rows(), vec![vec![4.0, 5.0, 6.0]]);
        assert_eq!(a.col(1).unwrap().to_rows(), vec![vec![2.0], vec![5.0], vec![8.0]]);
    }

    #[test]
    fn views_alias() {
        let a = get_3_3();
        let sub = a.slice(1, 3, 1, 3).unwrap();
        let t = a.t();
        assert_eq!(a.ref_count(), 3);

        sub.set(0, 1, -6.0);
        assert_eq!(a.get(1, 2), -6.0);
        assert_eq!(t.get(2, 1), -6.0);

        t.row(0).unwrap().fill(0.0);
        assert_eq!(a.col(0).unwrap().to_rows(), vec![vec![0.0]; 3]);

        drop(sub);
        drop(t);
        assert_eq!(a.ref_count(), 1);
    }

    #[test]
    fn huge_line_index() {
        let a = get_3_3();
        assert_eq!(
            a.row(usize::max_value()).unwrap_err(),
            MatrixError::OutOfRange { axis: Axis::Row, index: usize::max_value(), limit: 3 },
        );
        assert_eq!(
            a.col(usize::max_value()).unwrap_err(),
            MatrixError::OutOfRange { axis: Axis::Col, index: usize::max_value(), limit: 3 },
        );
        assert_eq!(
            a.t().row(3).unwrap_err(),
            MatrixError::OutOfRange { axis: Axis::Row, index: 4, limit: 3 },
        );
    }

    #[test]
    fn transpose() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = a.t();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.strides(), (1, 3));
        assert_eq!(t.row_stride(), a.col_stride());
        assert_eq!(t.col_stride(), a.row_stride());
        assert_eq!(t.size(), a.size());
        assert_eq!(a.row(0).unwrap().size(), 3);
        assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
        assert_eq!(t.t(), a);
        assert!(t.t().shares_buffer(&a));
    }

    #[test]
    fn swaps() {
        let a = get_3_3();
        let b = a.copy();
        for i1 in 0..a.nr() {
            for i2 in 0..a.nr() {
                a.row_swap(i1, i2);
                assert_eq!(a.row(i1).unwrap(), b.row(i2).unwrap());
                assert_eq!(a.row(i2).unwrap(), b.row(i1).unwrap());
                a.row_swap(i1, i2);
                assert_eq!(a, b);
            }
        }
        for j1 in 0..a.nc() {
            for j2 in 0..a.nc() {
                a.col_swap(j1, j2);
                assert_eq!(a.col(j1).unwrap(), b.col(j2).unwrap());
                assert_eq!(a.col(j2).unwrap(), b.col(j1).unwrap());
                a.col_swap(j1, j2);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn fill_only_touches_the_view() {
        let a = get_3_3();
        a.slice(0, 2, 1, 3).unwrap().fill(0.5);
        assert_eq!(a.to_rows(), vec![
            vec![1.0, 0.5, 0.5],
            vec![4.0, 0.5, 0.5],
            vec![7.0, 8.0, 9.0],
        ]);
    }
}
