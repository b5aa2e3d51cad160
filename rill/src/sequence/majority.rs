use crate::cursor::Cursor;
use crate::equality::Equality;

/// The element occurring in strictly more than half the positions, if any.
///
/// A first pass runs the Boyer-Moore vote, which only yields the one value
/// that *could* be the majority. A second pass over a clone of the iterator
/// counts that candidate to confirm it.
pub(crate) fn majority_element<I, E>(iter: I, equality: E) -> Option<I::Item>
where
    I: Iterator + Clone,
    E: Equality<I::Item>,
{
    let mut cursor = Cursor::new(iter.clone());
    let mut candidate = cursor.pull()?;
    let mut votes: usize = 1;
    for item in cursor {
        if votes == 0 {
            candidate = item;
            votes = 1;
        } else if equality.equals(&item, &candidate) {
            votes += 1;
        } else {
            votes -= 1;
        }
    }

    let (occurrences, total) = iter.fold((0usize, 0usize), |(occurrences, total), item| {
        let matched = usize::from(equality.equals(&item, &candidate));
        (occurrences + matched, total + 1)
    });
    (occurrences > total / 2).then_some(candidate)
}
