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

//! Matrices serialize as a list of rows, regardless of their strides.
//!
//! Deserializing always produces a fresh buffer.  An empty list of rows is
//! read back as `0x0`, so the column count of a matrix with no rows is lost.

use crate::Matrix;

use ::serde::{Serialize, Serializer, Deserialize, Deserializer};
use ::serde::de::Error as _;
use ::serde::ser::SerializeSeq;

struct RowSer<'a>(&'a Matrix, usize);

impl<'a> Serialize for RowSer<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { serializer.collect_seq(self.0.row_iter(self.1).map(|cell| cell.get())) }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    {
        let mut seq = serializer.serialize_seq(Some(self.nr()))?;
        for i in 0..self.nr() {
            seq.serialize_element(&RowSer(self, i))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Matrix, D::Error>
    {
        let rows: Vec<Vec<f64>> = Deserialize::deserialize(deserializer)?;
        Matrix::from_rows(&rows).map_err(D::Error::custom)
    }
}
