//! Transforms that rearrange a slice or matrix in place.
//!
//! None of these allocate: every rearrangement is done with swaps.

mod matrix;
mod partition;
mod shift;

pub use matrix::Matrix;
pub use partition::partition_by;
pub use shift::shift;

/// The in-place transforms as methods on slices.
pub trait SliceExt<T> {
    /// See [`shift`].
    fn shift(&mut self, shifts: isize);

    /// See [`partition_by`].
    fn partition_by<P>(&mut self, predicate: P) -> usize
    where
        P: FnMut(&T) -> bool;

    /// Whether `other` is a cyclic shift of this slice, see
    /// [`is_rotation_of`](crate::sequence::is_rotation_of).
    fn is_rotation_of(&self, other: &[T]) -> bool
    where
        T: PartialEq + Sync;
}

impl<T> SliceExt<T> for [T] {
    fn shift(&mut self, shifts: isize) {
        shift(self, shifts)
    }

    fn partition_by<P>(&mut self, predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        partition_by(self, predicate)
    }

    fn is_rotation_of(&self, other: &[T]) -> bool
    where
        T: PartialEq + Sync,
    {
        crate::sequence::is_rotation_of(self, other)
    }
}
