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

//! Dense `f64` matrices as strided views into shared buffers.
//!
//! See [`Matrix`] for the ownership model.
//!
//! [`Matrix`]: struct.Matrix.html

#[cfg(feature = "serde")]
extern crate serde;

use ::std::fmt;

pub use self::cursor::{StepCursor, StepIter};
pub use self::matrix::{Matrix, NMAX};

mod cursor;
mod display;
mod matrix;
mod ops;
#[cfg(feature = "serde")]
mod serde_impls;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis { Row, Col }

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// Two operands of an elementwise operation, assignment, comparison or
    /// product did not have compatible shapes.
    #[error("inconsistent shapes: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch { left: (usize, usize), right: (usize, usize) },

    /// A slice interval ended before it began.
    #[error("invalid {axis} interval {start}..{end}")]
    InvalidArgument { axis: Axis, start: usize, end: usize },

    /// A slice reached past the end of a view, or a dimension exceeded `NMAX`.
    #[error("{axis} index {index} exceeds limit {limit}")]
    OutOfRange { axis: Axis, index: usize, limit: usize },

    #[error("could not allocate a buffer of {len} scalars")]
    AllocationFailure { len: usize },
}
