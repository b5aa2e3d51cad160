use std::iter::{Chain, Skip, Take};

use super::known_len;

/// Normalize a signed shift count into `[0, len)`.
///
/// `len` must not be 0.
pub(crate) fn normalize_shifts(shifts: isize, len: usize) -> usize {
    // i128 holds every isize and usize
    (shifts as i128).rem_euclid(len as i128) as usize
}

/// A sequence cyclically shifted by a number of positions.
///
/// A positive shift moves elements toward the back, wrapping the last ones
/// around to the front: shifting `[A,B,C,D,E]` by 2 gives `[D,E,A,B,C]`.
/// A negative shift goes the other way. The shifted sequence is the last
/// `shifts` elements followed by the rest, read in two passes over clones
/// of the iterator.
#[derive(Debug, Clone)]
pub struct Shift<I> {
    inner: Chain<Skip<I>, Take<I>>,
}

impl<I> Shift<I>
where
    I: Iterator + Clone,
{
    pub(crate) fn new(iter: I, shifts: isize) -> Self {
        let len = known_len(&iter).unwrap_or_else(|| iter.clone().count());
        let keep = if len == 0 {
            0
        } else {
            len - normalize_shifts(shifts, len)
        };
        Shift {
            inner: iter.clone().skip(keep).chain(iter.take(keep)),
        }
    }
}

impl<I> Iterator for Shift<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
