mod chunk;
mod counting;
mod index;
mod majority;
mod merge;
mod pairs;
mod partition;
mod permutations;
mod rotation;
mod runs;
mod shift;
mod split;
mod traits;
mod trim;

pub use chunk::Chunks;
pub use index::EditAt;
pub use merge::{merge_all, MergeAll, MergeSortedBy};
pub use pairs::{SelectTargetPairs, SelectUniquePairs, UniquePairs};
pub use partition::PartitionedBy;
pub use permutations::Permutations;
pub use rotation::is_rotation_of;
pub use runs::IncreasingRuns;
pub use shift::Shift;
pub use split::{EmptyRuns, SplitBy};
pub use traits::{IndexedTargetPairs, SequenceExt, TargetPairs};
pub use trim::TrimBy;

pub(crate) use shift::normalize_shifts;

/// The exact number of remaining elements, if the iterator reports one.
pub(crate) fn known_len<I: Iterator>(iter: &I) -> Option<usize> {
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(lower),
        _ => None,
    }
}
