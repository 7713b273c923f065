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

#[macro_use]
extern crate log;
#[cfg(test)]
extern crate env_logger;
#[cfg(test)]
extern crate rand;

use ::rsp2_matrix::MatrixError;

pub use self::gauss_jordan::{select_pivot, transform_uut, solve_uut, solve_gj};
pub mod gauss_jordan;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EliminationError {
    #[error("cannot select a pivot in an empty {}x{} matrix", .dims.0, .dims.1)]
    IndexRange { dims: (usize, usize) },

    #[error("{what} (shape {}x{})", .dims.0, .dims.1)]
    Domain { what: &'static str, dims: (usize, usize) },

    #[error("coefficient matrix has {a_rows} rows, but the right hand side has {b_rows}")]
    InvalidArgument { a_rows: usize, b_rows: usize },

    /// No nonzero pivot could be found for `row` (counting from 0), so the
    /// equations from that row onwards are dependent or contradictory.
    #[error("matrix is singular; elimination stalled at row {row}")]
    Singular { row: usize },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
