use std::hash::Hash;

use indexmap::IndexMap;
use rill_group::Group;

use crate::error::Result;

/// Every unordered pair of positions `i < j`, ordered by `(i, j)`.
///
/// Each element of a pair is produced by a selector over the value and its
/// position, so the same adapter yields value pairs or index pairs.
#[derive(Debug, Clone)]
pub struct SelectUniquePairs<T, F> {
    items: Vec<T>,
    i: usize,
    j: usize,
    selector: F,
}

/// Value pairs, see [`SelectUniquePairs`].
pub type UniquePairs<T> = SelectUniquePairs<T, fn(&T, usize) -> T>;

pub(crate) fn clone_value<T: Clone>(value: &T, _index: usize) -> T {
    value.clone()
}

pub(crate) fn position_of<T>(_value: &T, index: usize) -> usize {
    index
}

impl<T: Clone> UniquePairs<T> {
    pub(crate) fn values(items: Vec<T>) -> Self {
        SelectUniquePairs::new(items, clone_value::<T> as fn(&T, usize) -> T)
    }
}

impl<T, U, F> SelectUniquePairs<T, F>
where
    F: FnMut(&T, usize) -> U,
{
    pub(crate) fn new(items: Vec<T>, selector: F) -> Self {
        SelectUniquePairs {
            items,
            i: 0,
            j: 1,
            selector,
        }
    }
}

impl<T, U, F> Iterator for SelectUniquePairs<T, F>
where
    F: FnMut(&T, usize) -> U,
{
    type Item = (U, U);

    fn next(&mut self) -> Option<(U, U)> {
        let n = self.items.len();
        while self.j >= n {
            // no j left for the next i either
            if self.i + 2 >= n {
                return None;
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        let (i, j) = (self.i, self.j);
        self.j += 1;
        Some((
            (self.selector)(&self.items[i], i),
            (self.selector)(&self.items[j], j),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.items.len();
        let rows_after = n.saturating_sub(self.i + 1);
        let in_row = n.saturating_sub(self.j);
        let remaining = rows_after
            .checked_mul(rows_after.saturating_sub(1))
            .map(|pairs| pairs / 2)
            .and_then(|pairs| pairs.checked_add(in_row));
        match remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

// pairs still to be produced for the value currently being processed
#[derive(Debug, Clone)]
enum Pending<T> {
    Idle,
    Same {
        value: T,
        pairs: SelectUniquePairs<usize, fn(&usize, usize) -> usize>,
    },
    Cross {
        value: T,
        other: T,
        indices: Vec<usize>,
        other_indices: Vec<usize>,
        i: usize,
        j: usize,
    },
}

fn index_value(index: &usize, _position: usize) -> usize {
    *index
}

/// Pairs of elements that combine to a target under a [`Group`].
///
/// For every distinct value `e` the complement `c = operate(target,
/// invert(e))` is looked up. If `c == e`, every two distinct positions
/// holding `e` form a pair; otherwise every position of `e` pairs with
/// every position of `c`. A value that has been paired is marked consumed
/// so its complement does not pair it again.
///
/// Values are visited in order of first occurrence. An element without an
/// inverse ends the iteration with an error.
#[derive(Debug, Clone)]
pub struct SelectTargetPairs<T, G, F> {
    group: G,
    target: T,
    lookup: IndexMap<T, Option<Vec<usize>>, ahash::RandomState>,
    position: usize,
    pending: Pending<T>,
    selector: F,
    failed: bool,
}

impl<T, G, U, F> SelectTargetPairs<T, G, F>
where
    T: Hash + Eq + Clone,
    G: Group<Element = T>,
    F: FnMut(&T, usize) -> U,
{
    pub(crate) fn new(iter: impl Iterator<Item = T>, target: T, group: G, selector: F) -> Self {
        let mut lookup: IndexMap<_, _, ahash::RandomState> = IndexMap::default();
        for (index, item) in iter.enumerate() {
            if let Some(indices) = lookup.entry(item).or_insert_with(|| Some(Vec::new())) {
                indices.push(index);
            }
        }
        SelectTargetPairs {
            group,
            target,
            lookup,
            position: 0,
            pending: Pending::Idle,
            selector,
            failed: false,
        }
    }

    fn next_pending(&mut self) -> Option<(U, U)> {
        match &mut self.pending {
            Pending::Idle => None,
            Pending::Same { value, pairs } => {
                let (a, b) = pairs.next()?;
                Some(((self.selector)(value, a), (self.selector)(value, b)))
            }
            Pending::Cross {
                value,
                other,
                indices,
                other_indices,
                i,
                j,
            } => {
                if *i >= indices.len() {
                    return None;
                }
                let pair = (
                    (self.selector)(value, indices[*i]),
                    (self.selector)(other, other_indices[*j]),
                );
                *j += 1;
                if *j == other_indices.len() {
                    *j = 0;
                    *i += 1;
                }
                Some(pair)
            }
        }
    }

    // Sets up the pairs of the next value that has any. Returns false when
    // all values are processed.
    fn advance_value(&mut self) -> Result<bool> {
        while let Some((value, slot)) = self.lookup.get_index_mut(self.position) {
            self.position += 1;
            let Some(indices) = slot.take() else {
                // already consumed
                continue;
            };
            let value = value.clone();
            let other = match self.group.complement(&self.target, &value) {
                Ok(other) => other,
                Err(e) => {
                    self.lookup[self.position - 1] = Some(indices);
                    return Err(e.into());
                }
            };
            if other == value {
                if indices.len() > 1 {
                    self.pending = Pending::Same {
                        value,
                        pairs: SelectUniquePairs::new(
                            indices,
                            index_value as fn(&usize, usize) -> usize,
                        ),
                    };
                    return Ok(true);
                }
            } else if let Some(other_indices) =
                self.lookup.get_mut(&other).and_then(Option::take)
            {
                self.pending = Pending::Cross {
                    value,
                    other,
                    indices,
                    other_indices,
                    i: 0,
                    j: 0,
                };
                return Ok(true);
            }
            // no partner, so it stays available
            self.lookup[self.position - 1] = Some(indices);
        }
        Ok(false)
    }
}

impl<T, G, U, F> Iterator for SelectTargetPairs<T, G, F>
where
    T: Hash + Eq + Clone,
    G: Group<Element = T>,
    F: FnMut(&T, usize) -> U,
{
    type Item = Result<(U, U)>;

    fn next(&mut self) -> Option<Result<(U, U)>> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(pair) = self.next_pending() {
                return Some(Ok(pair));
            }
            self.pending = Pending::Idle;
            match self.advance_value() {
                Ok(true) => continue,
                Ok(false) => return None,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rill_group::INTEGER_ADDITION;

    use super::*;
    use crate::error::Error;

    fn target_pairs(input: &[i32], target: i32) -> Vec<(i32, i32)> {
        let values = |v: &i32, _| *v;
        SelectTargetPairs::new(input.iter().copied(), target, INTEGER_ADDITION, values)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_unique_pair_indices() {
        let pairs = |n: usize| {
            SelectUniquePairs::new(vec!['x'; n], |_: &char, i| i).collect::<Vec<_>>()
        };
        assert!(pairs(0).is_empty());
        assert!(pairs(1).is_empty());
        assert_eq!(pairs(2), vec![(0, 1)]);
        assert_eq!(pairs(3), vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(
            pairs(5),
            vec![
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (1, 2),
                (1, 3),
                (1, 4),
                (2, 3),
                (2, 4),
                (3, 4)
            ]
        );
    }

    #[test]
    fn test_unique_pairs_fused() {
        let mut pairs = UniquePairs::values(vec![1, 2]);
        assert_eq!(pairs.next(), Some((1, 2)));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
    }

    #[test]
    fn test_unique_pairs_size_hint() {
        let mut pairs = UniquePairs::values((0..6).collect());
        assert_eq!(pairs.size_hint(), (15, Some(15)));
        pairs.next();
        pairs.next();
        assert_eq!(pairs.size_hint(), (13, Some(13)));
        assert_eq!(pairs.count(), 13);
    }

    #[test]
    fn test_two_sum() {
        assert_eq!(target_pairs(&[5, 3, -1, 2, 0], 2), vec![(3, -1), (2, 0)]);
        assert!(target_pairs(&[5, 3, -1, 2, 0], 6).is_empty());
    }

    #[test]
    fn test_self_pairs() {
        assert_eq!(target_pairs(&[4, 1, 4, 4], 8), vec![(4, 4), (4, 4), (4, 4)]);
        assert!(target_pairs(&[4, 1], 8).is_empty());
    }

    #[test]
    fn test_duplicates_pair_with_each_other() {
        let pairs =
            SelectTargetPairs::new([1, 1, 3].into_iter(), 4, INTEGER_ADDITION, |_: &i32, i| i)
                .collect::<Result<Vec<_>>>()
                .unwrap();
        assert_eq!(pairs, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_no_inverse() {
        let mut pairs = SelectTargetPairs::new(
            [i32::MIN, 1].into_iter(),
            0,
            INTEGER_ADDITION,
            |v: &i32, _| *v,
        );
        assert!(matches!(pairs.next(), Some(Err(Error::NoInverse(_)))));
        assert!(pairs.next().is_none());
    }
}
