use std::ptr;

use crate::parallel::*;

use super::shift::Shift;

/// Whether `second` is a cyclic shift of `first`.
///
/// Tries every shift of `second` against `first`. With the `parallel`
/// feature the trials are spread over the rayon thread pool; they only read
/// the slices.
pub fn is_rotation_of<T>(first: &[T], second: &[T]) -> bool
where
    T: PartialEq + Sync,
{
    if ptr::eq(first, second) {
        return true;
    }
    if first.len() != second.len() {
        return false;
    }
    if first.is_empty() {
        return true;
    }
    let len = first.len() as isize;
    (0..len)
        .into_par_iter()
        .any(|shifts| first.iter().eq(Shift::new(second.iter(), shifts)))
}
