use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use super::known_len;

/// Whether the iterator yields at least `count` elements.
///
/// Consumes at most `count` elements, and none when the length is known.
pub(crate) fn has_at_least<I: Iterator>(iter: I, count: usize) -> bool {
    match known_len(&iter) {
        Some(len) => len >= count,
        None => iter.take(count).count() == count,
    }
}

pub(crate) fn counts<I>(iter: I) -> AHashMap<I::Item, usize>
where
    I: Iterator,
    I::Item: Hash + Eq,
{
    let mut counts = AHashMap::new();
    for item in iter {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Whether both sequences hold the same values the same number of times,
/// in any order.
pub(crate) fn is_permutation_of<I, J>(iter: I, other: J) -> bool
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    I::Item: Hash + Eq,
{
    if let (Some(len), Some(other_len)) = (known_len(&iter), known_len(&other)) {
        if len != other_len {
            return false;
        }
    }
    let mut remaining = counts(iter);
    for item in other {
        match remaining.get_mut(&item) {
            Some(0) | None => return false,
            Some(count) => *count -= 1,
        }
    }
    remaining.values().all(|count| *count == 0)
}

/// Whether no value occurs more than once. Stops at the first repeat.
pub(crate) fn is_unique<I>(iter: I) -> bool
where
    I: Iterator,
    I::Item: Hash + Eq,
{
    let mut seen = AHashSet::new();
    for item in iter {
        if !seen.insert(item) {
            return false;
        }
    }
    true
}

/// The only element of the sequence; `None` if it has zero or several.
pub(crate) fn single<I: Iterator>(mut iter: I) -> Option<I::Item> {
    let first = iter.next()?;
    match iter.next() {
        Some(_) => None,
        None => Some(first),
    }
}
