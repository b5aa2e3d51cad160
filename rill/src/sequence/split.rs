use std::fmt;

use crate::cursor::Cursor;

/// Whether a split emits the empty runs between adjacent delimiters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EmptyRuns {
    Include,
    #[default]
    Exclude,
}

/// Runs of a sequence separated by delimiter elements.
///
/// Delimiters are never part of a run. Every delimiter closes the run
/// collected since the previous delimiter (or the start); a closed run that
/// is empty is only emitted with [`EmptyRuns::Include`]. Whatever follows
/// the last delimiter is emitted if it is not empty.
pub struct SplitBy<I, P>
where
    I: Iterator,
{
    cursor: Cursor<I>,
    is_delimiter: P,
    empties: EmptyRuns,
}

impl<I, P> Clone for SplitBy<I, P>
where
    I: Iterator + Clone,
    I::Item: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        SplitBy {
            cursor: self.cursor.clone(),
            is_delimiter: self.is_delimiter.clone(),
            empties: self.empties,
        }
    }
}

impl<I, P> fmt::Debug for SplitBy<I, P>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SplitBy")
            .field("cursor", &self.cursor)
            .field("empties", &self.empties)
            .finish_non_exhaustive()
    }
}

impl<I, P> SplitBy<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(iter: I, is_delimiter: P, empties: EmptyRuns) -> Self {
        SplitBy {
            cursor: Cursor::new(iter),
            is_delimiter,
            empties,
        }
    }
}

impl<I, P> Iterator for SplitBy<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let mut run = Vec::new();
        loop {
            match self.cursor.pull() {
                Some(item) => {
                    if !(self.is_delimiter)(&item) {
                        run.push(item);
                    } else if !run.is_empty() || self.empties == EmptyRuns::Include {
                        return Some(run);
                    }
                }
                None => return (!run.is_empty()).then_some(run),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.cursor.size_hint();
        (0, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str, empties: EmptyRuns) -> Vec<String> {
        SplitBy::new(s.chars(), |c: &char| *c == 'X', empties)
            .map(|run| run.into_iter().collect())
            .collect()
    }

    #[test]
    fn test_split_exclude_empties() {
        assert_eq!(split("ABXAXXCAX", EmptyRuns::Exclude), vec!["AB", "A", "CA"]);
    }

    #[test]
    fn test_split_include_empties() {
        assert_eq!(
            split("ABXAXXCAX", EmptyRuns::Include),
            vec!["AB", "A", "", "CA"]
        );
    }

    #[test]
    fn test_leading_delimiter() {
        assert_eq!(split("XA", EmptyRuns::Include), vec!["", "A"]);
        assert_eq!(split("XA", EmptyRuns::Exclude), vec!["A"]);
    }

    #[test]
    fn test_only_delimiters() {
        assert!(split("XXX", EmptyRuns::Exclude).is_empty());
        assert_eq!(split("XXX", EmptyRuns::Include), vec!["", "", ""]);
    }

    #[test]
    fn test_clone() {
        let mut runs =
            SplitBy::new("abXcd".chars(), |c: &char| *c == 'X', EmptyRuns::Exclude);
        let copy = runs.clone();
        assert!(format!("{:?}", copy).starts_with("SplitBy"));
        assert_eq!(runs.next(), Some(vec!['a', 'b']));
        assert_eq!(copy.count(), 2);
        assert_eq!(runs.next(), Some(vec!['c', 'd']));
    }

    #[test]
    fn test_empty() {
        assert!(split("", EmptyRuns::Include).is_empty());
    }

    #[test]
    fn test_no_delimiter() {
        assert_eq!(split("ABC", EmptyRuns::Exclude), vec!["ABC"]);
    }

    #[test]
    fn test_split_on_even() {
        let split = |input: &[i32]| {
            SplitBy::new(input.iter().copied(), |n: &i32| n % 2 == 0, EmptyRuns::Exclude)
                .collect::<Vec<_>>()
        };
        assert_eq!(split(&[]), Vec::<Vec<i32>>::new());
        assert_eq!(split(&[1]), vec![vec![1]]);
        assert_eq!(split(&[1, 2]), vec![vec![1]]);
        assert_eq!(split(&[1, 2, 1]), vec![vec![1], vec![1]]);
        assert_eq!(split(&[2, 1]), vec![vec![1]]);
        assert_eq!(split(&[1, 2, 3, 4, 5]), vec![vec![1], vec![3], vec![5]]);
        assert_eq!(
            split(&[1, 2, 3, 1, 3, 2, 6, 2, 5, 4]),
            vec![vec![1], vec![3, 1, 3], vec![5]]
        );
    }
}
