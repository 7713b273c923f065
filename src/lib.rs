//! Dense matrices as strided views into shared buffers, and a Gauss-Jordan
//! solver that works in place on those views.
//!
//! ```
//! use rsp2_gauss::{Matrix, solve_gj};
//!
//! // 2x + 3y = 11
//! // 3x +  y =  6
//! let ab = Matrix::from_rows(&[
//!     [2.0, 3.0, 11.0],
//!     [3.0, 1.0,  6.0],
//! ])?;
//! solve_gj(&ab)?;
//!
//! let x = ab.col(2)?;
//! assert!((x.get(0, 0) - 1.0).abs() < 1e-12);
//! assert!((x.get(1, 0) - 3.0).abs() < 1e-12);
//! # Ok::<(), rsp2_gauss::EliminationError>(())
//! ```

pub use rsp2_matrix::{Matrix, MatrixError, Axis, StepCursor, StepIter, NMAX};
pub use rsp2_linalg::{EliminationError, select_pivot, transform_uut, solve_uut, solve_gj};
pub use rsp2_linalg::gauss_jordan;
