use std::cmp::Ordering;
use std::fmt;

use crate::cursor::Cursor;

/// Merge of two sorted sequences into one sorted sequence.
///
/// When both heads compare equal the head of the right-hand sequence is
/// yielded first.
pub struct MergeSortedBy<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    left: Cursor<I>,
    right: Cursor<J>,
    compare: F,
}

impl<I, J, F> Clone for MergeSortedBy<I, J, F>
where
    I: Iterator + Clone,
    J: Iterator<Item = I::Item> + Clone,
    I::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        MergeSortedBy {
            left: self.left.clone(),
            right: self.right.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<I, J, F> fmt::Debug for MergeSortedBy<I, J, F>
where
    I: Iterator + fmt::Debug,
    J: Iterator<Item = I::Item> + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MergeSortedBy")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

impl<I, J, F> MergeSortedBy<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    pub(crate) fn new(left: I, right: J, compare: F) -> Self {
        MergeSortedBy {
            left: Cursor::new(left),
            right: Cursor::new(right),
            compare,
        }
    }
}

impl<I, J, F> Iterator for MergeSortedBy<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let from_right = match (self.left.peek(), self.right.peek()) {
            (None, None) => return None,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (Some(left), Some(right)) => (self.compare)(left, right) != Ordering::Less,
        };
        if from_right {
            self.right.take_current().ok()
        } else {
            self.left.take_current().ok()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => left.checked_add(right),
            _ => None,
        };
        (left_lower.saturating_add(right_lower), upper)
    }
}

/// An N-way merge, see [`merge_all`].
pub type MergeAll<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Merge any number of sorted sequences into one sorted sequence.
///
/// The sources are merged pairwise from left to right, starting from an
/// empty sequence, so on ties later sources come out before earlier ones.
pub fn merge_all<'a, S, T>(sources: S) -> MergeAll<'a, T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    <S::Item as IntoIterator>::IntoIter: 'a,
    T: Ord + 'a,
{
    let empty: MergeAll<'a, T> = Box::new(std::iter::empty());
    sources.into_iter().fold(empty, |merged, source| -> MergeAll<'a, T> {
        Box::new(MergeSortedBy::new(merged, source.into_iter(), T::cmp))
    })
}
