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

use ::std::cell::Cell;
use ::std::cmp::Ordering;
use ::std::fmt;
use ::std::ops::{Add, Sub, AddAssign, SubAssign};

/// A position inside a scalar buffer that moves by a fixed step.
///
/// This is what rows and columns of a [`Matrix`] look like up close: a row
/// is a cursor with step `col_stride`, a column is a cursor with step
/// `row_stride`.  Cursors may wander outside of the buffer (one-past-the-end
/// is the usual case) as long as they are not dereferenced there.
///
/// Comparisons and distances only make sense between cursors over the same
/// buffer with the same step.  This is checked in debug builds.
///
/// [`Matrix`]: struct.Matrix.html
#[derive(Clone, Copy)]
pub struct StepCursor<'a> {
    data: &'a [Cell<f64>],
    pos: isize,
    step: isize,
}

impl<'a> StepCursor<'a> {
    pub fn new(data: &'a [Cell<f64>], pos: usize, step: usize) -> Self
    { StepCursor { data, pos: pos as isize, step: step as isize } }

    pub fn step(&self) -> usize { self.step as usize }

    /// Raw element index into the buffer. (may be negative or past the end)
    pub fn position(&self) -> isize { self.pos }

    /// The cell under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor currently lies outside of its buffer.
    #[inline]
    pub fn cell(&self) -> &'a Cell<f64>
    { self.at(0) }

    /// The cell `n` steps ahead, without moving.
    #[inline]
    pub fn at(&self, n: isize) -> &'a Cell<f64>
    {
        let pos = self.pos + n * self.step;
        assert!(
            0 <= pos && (pos as usize) < self.data.len(),
            "cursor dereferenced outside of its buffer (position {}, length {})",
            pos, self.data.len(),
        );
        &self.data[pos as usize]
    }

    #[inline] pub fn get(&self) -> f64 { self.cell().get() }
    #[inline] pub fn set(&self, value: f64) { self.cell().set(value) }

    #[inline]
    pub fn inc(&mut self) -> &mut Self
    { self.pos += self.step; self }

    #[inline]
    pub fn dec(&mut self) -> &mut Self
    { self.pos -= self.step; self }

    /// Advance, returning the cursor as it was before.
    #[inline]
    pub fn post_inc(&mut self) -> Self
    {
        let old = *self;
        self.inc();
        old
    }

    /// Retreat, returning the cursor as it was before.
    #[inline]
    pub fn post_dec(&mut self) -> Self
    {
        let old = *self;
        self.dec();
        old
    }

    /// Signed number of steps from `origin` to `self`.
    ///
    /// Both cursors must have the same step.
    pub fn distance_from(&self, origin: &StepCursor<'a>) -> isize
    {
        assert_eq!(self.step, origin.step, "distance between cursors of different steps");
        self.debug_check_same_buffer(origin);
        match self.step {
            // every position is the same position
            0 => 0,
            step => (self.pos - origin.pos) / step,
        }
    }

    pub fn same_buffer(&self, other: &StepCursor<'_>) -> bool
    { ::std::ptr::eq(self.data.as_ptr(), other.data.as_ptr()) }

    /// Iterate over the cells in `[self, end)`.
    pub fn iter_to(self, end: StepCursor<'a>) -> StepIter<'a>
    {
        let len = end.distance_from(&self);
        StepIter::new(self, if len < 0 { 0 } else { len as usize })
    }

    #[inline(always)]
    fn debug_check_same_buffer(&self, other: &StepCursor<'_>)
    { debug_assert!(self.same_buffer(other), "comparing cursors over different buffers") }
}

impl<'a> fmt::Debug for StepCursor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("StepCursor")
            .field("pos", &self.pos)
            .field("step", &self.step)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ordering (by raw position)

impl<'a> PartialEq for StepCursor<'a> {
    fn eq(&self, other: &Self) -> bool
    {
        self.debug_check_same_buffer(other);
        self.pos == other.pos
    }
}

impl<'a> Eq for StepCursor<'a> {}

impl<'a> PartialOrd for StepCursor<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>
    { Some(self.cmp(other)) }
}

impl<'a> Ord for StepCursor<'a> {
    fn cmp(&self, other: &Self) -> Ordering
    {
        self.debug_check_same_buffer(other);
        self.pos.cmp(&other.pos)
    }
}

// ---------------------------------------------------------------------------
// offset arithmetic

impl<'a> AddAssign<isize> for StepCursor<'a> {
    #[inline]
    fn add_assign(&mut self, n: isize)
    { self.pos += n * self.step; }
}

impl<'a> SubAssign<isize> for StepCursor<'a> {
    #[inline]
    fn sub_assign(&mut self, n: isize)
    { self.pos -= n * self.step; }
}

impl<'a> Add<isize> for StepCursor<'a> {
    type Output = StepCursor<'a>;

    #[inline]
    fn add(mut self, n: isize) -> Self::Output
    { self += n; self }
}

impl<'a> Sub<isize> for StepCursor<'a> {
    type Output = StepCursor<'a>;

    #[inline]
    fn sub(mut self, n: isize) -> Self::Output
    { self -= n; self }
}

impl<'a> Sub<StepCursor<'a>> for StepCursor<'a> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: StepCursor<'a>) -> isize
    { self.distance_from(&origin) }
}

// ---------------------------------------------------------------------------

/// Iterator over a fixed number of cells starting at a cursor.
#[derive(Debug, Clone)]
pub struct StepIter<'a> {
    cursor: StepCursor<'a>,
    remaining: usize,
}

impl<'a> StepIter<'a> {
    pub fn new(cursor: StepCursor<'a>, len: usize) -> Self
    { StepIter { cursor, remaining: len } }

    /// The cursor that the next call to `next` would read.
    pub fn cursor(&self) -> StepCursor<'a> { self.cursor }
}

impl<'a> Iterator for StepIter<'a> {
    type Item = &'a Cell<f64>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        match self.remaining {
            0 => None,
            _ => {
                self.remaining -= 1;
                Some(self.cursor.post_inc().cell())
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    { (self.remaining, Some(self.remaining)) }
}

impl<'a> DoubleEndedIterator for StepIter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item>
    {
        match self.remaining {
            0 => None,
            _ => {
                self.remaining -= 1;
                Some(self.cursor.at(self.remaining as isize))
            },
        }
    }
}

impl<'a> ExactSizeIterator for StepIter<'a> {}
