use std::cmp::Ordering;
use std::hash::Hash;

use ahash::AHashMap;
use itertools::Either;
use rill_group::Group;

use crate::equality::{self, Equality};
use crate::error::{Result, Unsupported};

use super::{
    chunk::Chunks,
    counting,
    index::EditAt,
    majority,
    merge::MergeSortedBy,
    pairs::{self, SelectTargetPairs, SelectUniquePairs, UniquePairs},
    partition::PartitionedBy,
    permutations::Permutations,
    runs::IncreasingRuns,
    shift::Shift,
    split::{EmptyRuns, SplitBy},
    trim::TrimBy,
};

/// Value pairs combining to a target, see [`SequenceExt::target_pairs`].
pub type TargetPairs<T, G> = SelectTargetPairs<T, G, fn(&T, usize) -> T>;

/// Index pairs combining to a target, see
/// [`SequenceExt::target_pair_indices`].
pub type IndexedTargetPairs<T, G> = SelectTargetPairs<T, G, fn(&T, usize) -> usize>;

type Compare<T> = fn(&T, &T) -> Ordering;

/// Sequence operators available on every iterator.
///
/// Operators returning an iterator are lazy: they pull from the source only
/// as far as needed to produce the next element. Operators that need two
/// passes over their input (majority vote, shifting, lazy partitioning)
/// require the iterator to be `Clone` and read a clone for the second pass.
pub trait SequenceExt: Iterator + Sized {
    /// All `n!` orderings of the sequence.
    ///
    /// The input is collected first. An empty sequence has no
    /// permutations.
    fn permutations(self) -> Permutations<Self::Item>
    where
        Self::Item: Clone,
    {
        Permutations::new(self.collect())
    }

    /// Permutations that skip repeated arrangements. Not supported.
    fn distinct_permutations(self) -> Result<Permutations<Self::Item>> {
        Err(Unsupported::DistinctPermutations.into())
    }

    /// Merge with another sorted sequence.
    ///
    /// On ties the element from `other` comes first.
    fn merge_sorted<J>(self, other: J) -> MergeSortedBy<Self, J::IntoIter, Compare<Self::Item>>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        MergeSortedBy::new(
            self,
            other.into_iter(),
            <Self::Item as Ord>::cmp as Compare<Self::Item>,
        )
    }

    /// Merge with another sequence sorted by `compare`.
    fn merge_sorted_by<J, F>(self, other: J, compare: F) -> MergeSortedBy<Self, J::IntoIter, F>
    where
        J: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        MergeSortedBy::new(self, other.into_iter(), compare)
    }

    /// Runs of `size` elements; the last run may be shorter.
    ///
    /// Fails with [`InvalidArgument`](crate::Error::InvalidArgument) for a
    /// size of 0.
    fn chunk_by(self, size: usize) -> Result<Chunks<Self>> {
        Chunks::new(self, size)
    }

    /// Split on the elements matching `is_delimiter`.
    fn split_by<P>(self, is_delimiter: P, empties: EmptyRuns) -> SplitBy<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SplitBy::new(self, is_delimiter, empties)
    }

    /// Split on the elements equal to `delimiter`.
    fn split_on(
        self,
        delimiter: Self::Item,
        empties: EmptyRuns,
    ) -> SplitBy<Self, impl FnMut(&Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        self.split_on_by(delimiter, empties, equality::resolve::<Self::Item>())
    }

    /// Split on the elements `equality` deems equal to `delimiter`.
    fn split_on_by<E>(
        self,
        delimiter: Self::Item,
        empties: EmptyRuns,
        equality: E,
    ) -> SplitBy<Self, impl FnMut(&Self::Item) -> bool>
    where
        E: Equality<Self::Item>,
    {
        SplitBy::new(
            self,
            move |item: &Self::Item| equality.equals(item, &delimiter),
            empties,
        )
    }

    /// The element making up strictly more than half the sequence.
    fn majority_element(self) -> Option<Self::Item>
    where
        Self: Clone,
        Self::Item: PartialEq,
    {
        majority::majority_element(self, equality::resolve::<Self::Item>())
    }

    /// The element making up strictly more than half the sequence, under
    /// `equality`.
    fn majority_element_by<E>(self, equality: E) -> Option<Self::Item>
    where
        Self: Clone,
        E: Equality<Self::Item>,
    {
        majority::majority_element(self, equality)
    }

    /// Maximal strictly increasing runs of at least two elements.
    fn increasing_runs(self) -> IncreasingRuns<Self>
    where
        Self::Item: PartialOrd,
    {
        IncreasingRuns::new(self)
    }

    /// Cyclically shift the sequence by `shifts` positions; negative
    /// shifts go the other way.
    fn shift(self, shifts: isize) -> Shift<Self>
    where
        Self: Clone,
    {
        Shift::new(self, shifts)
    }

    /// Every pair of elements at positions `i < j`.
    fn unique_pairs(self) -> UniquePairs<Self::Item>
    where
        Self::Item: Clone,
    {
        UniquePairs::values(self.collect())
    }

    /// Every pair of positions `i < j`, each side mapped by `selector`
    /// from the element and its position.
    fn select_unique_pairs<U, F>(self, selector: F) -> SelectUniquePairs<Self::Item, F>
    where
        F: FnMut(&Self::Item, usize) -> U,
    {
        SelectUniquePairs::new(self.collect(), selector)
    }

    /// Pairs of values combining to `target` under `group`.
    ///
    /// With [`INTEGER_ADDITION`](rill_group::INTEGER_ADDITION) this is the
    /// classic two-sum.
    fn target_pairs<G>(self, target: Self::Item, group: G) -> TargetPairs<Self::Item, G>
    where
        Self::Item: Hash + Eq + Clone,
        G: Group<Element = Self::Item>,
    {
        SelectTargetPairs::new(
            self,
            target,
            group,
            pairs::clone_value::<Self::Item> as fn(&Self::Item, usize) -> Self::Item,
        )
    }

    /// Pairs of positions whose values combine to `target` under `group`.
    fn target_pair_indices<G>(
        self,
        target: Self::Item,
        group: G,
    ) -> IndexedTargetPairs<Self::Item, G>
    where
        Self::Item: Hash + Eq + Clone,
        G: Group<Element = Self::Item>,
    {
        SelectTargetPairs::new(
            self,
            target,
            group,
            pairs::position_of::<Self::Item> as fn(&Self::Item, usize) -> usize,
        )
    }

    /// Pairs combining to `target` under `group`, each side mapped by
    /// `selector` from the value and its position.
    fn select_target_pairs<G, U, F>(
        self,
        target: Self::Item,
        group: G,
        selector: F,
    ) -> SelectTargetPairs<Self::Item, G, F>
    where
        Self::Item: Hash + Eq + Clone,
        G: Group<Element = Self::Item>,
        F: FnMut(&Self::Item, usize) -> U,
    {
        SelectTargetPairs::new(self, target, group, selector)
    }

    /// Drop the leading and trailing runs of any of the `excluded` values.
    fn trim<S>(self, excluded: S) -> TrimBy<Self, impl FnMut(&Self::Item) -> bool>
    where
        S: IntoIterator<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        let excluded = excluded.into_iter().collect::<Vec<_>>();
        TrimBy::new(self, move |item: &Self::Item| excluded.contains(item))
    }

    /// Drop the leading and trailing runs of elements matching
    /// `is_excluded`.
    fn trim_by<P>(self, is_excluded: P) -> TrimBy<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TrimBy::new(self, is_excluded)
    }

    /// The sequence without the element at `index`.
    ///
    /// See [`EditAt`] for how an out of range index is reported.
    fn skip_at(self, index: usize) -> Result<EditAt<Self>> {
        EditAt::skip(self, index)
    }

    /// The sequence with the element at `index` replaced by `replacement`.
    fn replace_at(self, index: usize, replacement: Self::Item) -> Result<EditAt<Self>> {
        EditAt::replace(self, index, replacement)
    }

    fn has_at_least(self, count: usize) -> bool {
        counting::has_at_least(self, count)
    }

    /// All selections of `count` elements.
    ///
    /// Only counts of 0 (no selections) and 1 (every element on its own)
    /// are supported; larger counts fail with
    /// [`Unsupported::ChooseMany`].
    fn choose(self, count: usize) -> Result<impl Iterator<Item = Vec<Self::Item>>> {
        match count {
            0 => Ok(Either::Left(std::iter::empty())),
            1 => Ok(Either::Right(self.map(|item| vec![item]))),
            _ => Err(Unsupported::ChooseMany.into()),
        }
    }

    /// How many times each value occurs.
    fn counts(self) -> AHashMap<Self::Item, usize>
    where
        Self::Item: Hash + Eq,
    {
        counting::counts(self)
    }

    /// Run-length encoding: each run of equal adjacent values as the value
    /// and the run length.
    fn adjacent_counts(self) -> impl Iterator<Item = (Self::Item, usize)>
    where
        Self::Item: PartialEq,
    {
        self.adjacent_counts_by(equality::resolve::<Self::Item>())
    }

    fn adjacent_counts_by<E>(self, equality: E) -> impl Iterator<Item = (Self::Item, usize)>
    where
        E: Equality<Self::Item>,
    {
        itertools::Itertools::dedup_by_with_count(self, move |a, b| equality.equals(a, b))
            .map(|(count, item)| (item, count))
    }

    /// Whether `other` holds the same values the same number of times.
    fn is_permutation_of<J>(self, other: J) -> bool
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Hash + Eq,
    {
        counting::is_permutation_of(self, other.into_iter())
    }

    fn is_unique(self) -> bool
    where
        Self::Item: Hash + Eq,
    {
        counting::is_unique(self)
    }

    /// The only element, or `None` if there are zero or several.
    fn single(self) -> Option<Self::Item> {
        counting::single(self)
    }

    /// A stable partition: failing elements first, then passing ones.
    fn partitioned_by<P>(self, predicate: P) -> PartitionedBy<Self, P>
    where
        Self: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        PartitionedBy::new(self, predicate)
    }

    /// Replace every occurrence of the subsequence `find`. Not supported.
    fn find_and_replace(
        self,
        _find: &[Self::Item],
        _replacement: &[Self::Item],
    ) -> Result<std::vec::IntoIter<Self::Item>> {
        Err(Unsupported::FindAndReplace.into())
    }
}

impl<I: Iterator> SequenceExt for I {}
