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

use crate::Matrix;

use ::std::fmt;

const FIELD_WIDTH: usize = 11;
const SIG_FIGS: usize = 6;

/// Bordered grid for eyeballing small matrices.  Not meant to be parsed.
///
/// ```text
/// +-------------------------+
/// |           1           2 |
/// |           3         4.5 |
/// +-------------------------+
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let border = "-".repeat((FIELD_WIDTH + 1) * usize::max(self.nc(), 1) - 1);
        writeln!(f, "+-{}-+", border)?;
        if self.nr() == 0 {
            write!(f, "|")?;
            match self.nc() {
                0 => write!(f, " (empty-mtx)")?,
                nc => for _ in 0..nc {
                    write!(f, " (empty-clm)")?;
                },
            }
            writeln!(f, " |")?;
        }
        for i in 0..self.nr() {
            write!(f, "|")?;
            if self.nc() == 0 {
                write!(f, " (empty-row)")?;
            }
            for cell in self.row_iter(i) {
                write!(f, " {:>width$}", format_general(cell.get()), width = FIELD_WIDTH)?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "+-{}-+", border)
    }
}

impl Matrix {
    /// Write the `Display` form to stdout, followed by a newline.
    pub fn print(&self)
    { println!("{}", self) }
}

/// `printf`'s `%g` with the default precision of 6 significant figures.
///
/// This is the format that C++ streams use for doubles by default, which is
/// what people tend to expect a table of numbers to look like.
pub(crate) fn format_general(x: f64) -> String
{
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Let the float formatter do the rounding, then read the exponent back
    // out of the result, since rounding can carry into the next power of ten.
    let sci = format!("{:.*e}", SIG_FIGS - 1, x);
    let (mantissa, exp) = match sci.find('e') {
        Some(pos) => (&sci[..pos], &sci[pos + 1..]),
        None => unreachable!("no exponent in {:?}", sci),
    };
    let exp: i32 = match exp.parse() {
        Ok(exp) => exp,
        Err(_) => unreachable!("bad exponent in {:?}", sci),
    };

    if exp < -4 || exp >= SIG_FIGS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (SIG_FIGS as i32 - 1 - exp) as usize;
        strip_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn strip_zeros(s: &str) -> &str
{
    match s.contains('.') {
        true => s.trim_end_matches('0').trim_end_matches('.'),
        false => s,
    }
}
