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

use crate::{Matrix, MatrixError};

use ::std::ops::{Add, Sub, Neg, Mul, Div};
use ::std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};
use ::itertools::Itertools;

// NOTE: All in-place operations work through `&self`, since writing through
//       a view is always allowed.  The `std::ops` compound operators are sugar
//       over these and panic where these would return `Err`.

// ---------------------------------------------------------------------------
// in-place arithmetic

impl Matrix {
    /// `self += other`, elementwise.
    pub fn add_assign_from(&self, other: &Matrix) -> Result<(), MatrixError>
    { self.zip_assign_with(other, |a, b| a + b) }

    /// `self -= other`, elementwise.
    pub fn sub_assign_from(&self, other: &Matrix) -> Result<(), MatrixError>
    { self.zip_assign_with(other, |a, b| a - b) }

    /// `self *= k`
    pub fn scale(&self, k: f64)
    { self.map_assign(|x| x * k) }

    /// `self /= k`
    pub fn div_scalar(&self, k: f64)
    { self.map_assign(|x| x / k) }

    /// Replace every element `x` of this view with `func(x)`.
    pub fn map_assign(&self, mut func: impl FnMut(f64) -> f64)
    {
        for i in 0..self.nr() {
            for cell in self.row_iter(i) {
                cell.set(func(cell.get()));
            }
        }
    }

    /// Replace every element `x` of this view with `func(x, y)`, where `y` is the
    /// corresponding element of `other`.
    pub fn zip_assign_with(&self, other: &Matrix, func: impl Fn(f64, f64) -> f64) -> Result<(), MatrixError>
    {
        self.check_same_dims(other)?;
        self.zip_rows_with(other, |dest, src| dest.set(func(dest.get(), src.get())));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// operations producing new matrices

impl Matrix {
    /// Unary plus.  Always a fresh buffer.
    pub fn pos(&self) -> Matrix
    { self.map(|x| x) }

    /// Apply a function elementwise, producing a fresh C-layout matrix.
    pub fn map(&self, mut func: impl FnMut(f64) -> f64) -> Matrix
    {
        let out = Matrix::zeros_like_dims(self.dims());
        self.zip_rows_with(&out, |src, dest| dest.set(func(src.get())));
        out
    }

    pub fn try_add(&self, other: &Matrix) -> Result<Matrix, MatrixError>
    {
        let out = self.copy();
        out.add_assign_from(other)?;
        Ok(out)
    }

    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix, MatrixError>
    {
        let out = self.copy();
        out.sub_assign_from(other)?;
        Ok(out)
    }

    /// Matrix product.
    ///
    /// Each output element is accumulated from `0.0` along a row cursor of
    /// `self` and a column cursor of `other`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError>
    {
        if self.nc() != other.nr() {
            return Err(self.shape_mismatch(other.dims()));
        }

        // this is suboptimal.  who cares.
        let out = Matrix::zeros_like_dims((self.nr(), other.nc()));
        for i in 0..out.nr() {
            for (j, dest) in out.row_iter(i).enumerate() {
                let mut acc = 0.0;
                for (a, b) in self.row_iter(i).zip_eq(other.col_iter(j)) {
                    acc += a.get() * b.get();
                }
                dest.set(acc);
            }
        }
        Ok(out)
    }

    /// Elementwise equality, in row-major order.
    ///
    /// Unlike `==`, comparing matrices of different shapes is an error.
    pub fn try_eq(&self, other: &Matrix) -> Result<bool, MatrixError>
    {
        self.check_same_dims(other)?;
        for i in 0..self.nr() {
            for (a, b) in self.row_iter(i).zip_eq(other.row_iter(i)) {
                if a.get() != b.get() {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}

/// Matrices of different shapes compare unequal.
///
/// Use [`Matrix::try_eq`] to treat that as an error instead.
///
/// [`Matrix::try_eq`]: struct.Matrix.html#method.try_eq
impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool
    { self.try_eq(other).unwrap_or(false) }
}

// ---------------------------------------------------------------------------
// std::ops
//
// Binary operators always copy the left operand, even when it is taken by
// value; it may be a view onto data that is visible elsewhere.

fn unwrap_shapes<T>(result: Result<T, MatrixError>) -> T
{
    match result {
        Ok(x) => x,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! impl_binary_ops {
    ($( [$($lt:lifetime)*] $A:ty, $B:ty; )*) => {$(
        impl<$($lt),*> Add<$B> for $A {
            type Output = Matrix;

            /// # Panics
            ///
            /// Panics on a shape mismatch.  See `Matrix::try_add`.
            fn add(self, other: $B) -> Matrix
            { unwrap_shapes(self.try_add(&other)) }
        }

        impl<$($lt),*> Sub<$B> for $A {
            type Output = Matrix;

            /// # Panics
            ///
            /// Panics on a shape mismatch.  See `Matrix::try_sub`.
            fn sub(self, other: $B) -> Matrix
            { unwrap_shapes(self.try_sub(&other)) }
        }

        impl<$($lt),*> Mul<$B> for $A {
            type Output = Matrix;

            /// # Panics
            ///
            /// Panics on a shape mismatch.  See `Matrix::matmul`.
            fn mul(self, other: $B) -> Matrix
            { unwrap_shapes(self.matmul(&other)) }
        }
    )*};
}

impl_binary_ops! {
    ['a 'b] &'a Matrix, &'b Matrix;
    ['a] &'a Matrix, Matrix;
    ['b] Matrix, &'b Matrix;
    [] Matrix, Matrix;
}

macro_rules! impl_scalar_ops {
    ($( [$($lt:lifetime)*] $A:ty; )*) => {$(
        impl<$($lt),*> Neg for $A {
            type Output = Matrix;

            fn neg(self) -> Matrix
            { self.map(|x| -x) }
        }

        impl<$($lt),*> Mul<f64> for $A {
            type Output = Matrix;

            fn mul(self, k: f64) -> Matrix
            {
                let out = self.copy();
                out.scale(k);
                out
            }
        }

        impl<$($lt),*> Div<f64> for $A {
            type Output = Matrix;

            fn div(self, k: f64) -> Matrix
            {
                let out = self.copy();
                out.div_scalar(k);
                out
            }
        }

        // scalar * matrix
        impl<$($lt),*> Mul<$A> for f64 {
            type Output = Matrix;

            fn mul(self, matrix: $A) -> Matrix
            { matrix * self }
        }
    )*};
}

impl_scalar_ops! {
    ['a] &'a Matrix;
    [] Matrix;
}

impl<'a> AddAssign<&'a Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics on a shape mismatch.  See `Matrix::add_assign_from`.
    fn add_assign(&mut self, other: &'a Matrix)
    { unwrap_shapes(self.add_assign_from(other)) }
}

impl<'a> SubAssign<&'a Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics on a shape mismatch.  See `Matrix::sub_assign_from`.
    fn sub_assign(&mut self, other: &'a Matrix)
    { unwrap_shapes(self.sub_assign_from(other)) }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, k: f64)
    { self.scale(k) }
}

impl DivAssign<f64> for Matrix {
    fn div_assign(&mut self, k: f64)
    { self.div_scalar(k) }
}
