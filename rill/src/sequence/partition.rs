/// A stable partition of a sequence: every element failing the predicate,
/// then every element passing it, each group in input order.
///
/// The two groups are read in separate passes over clones of the iterator.
#[derive(Debug, Clone)]
pub struct PartitionedBy<I, P> {
    failing: Option<I>,
    passing: I,
    predicate: P,
}

impl<I, P> PartitionedBy<I, P>
where
    I: Iterator + Clone,
    P: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        PartitionedBy {
            failing: Some(iter.clone()),
            passing: iter,
            predicate,
        }
    }
}

impl<I, P> Iterator for PartitionedBy<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(failing) = &mut self.failing {
            for item in failing.by_ref() {
                if !(self.predicate)(&item) {
                    return Some(item);
                }
            }
            self.failing = None;
        }
        self.passing.by_ref().find(|item| (self.predicate)(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.passing.size_hint();
        let failing_upper = match &self.failing {
            Some(failing) => failing.size_hint().1,
            None => Some(0),
        };
        let upper = upper.zip(failing_upper).and_then(|(a, b)| a.checked_add(b));
        (0, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partitioned_by() {
        let partitioned = PartitionedBy::new(1..=8, |n: &i32| n % 3 == 0).collect::<Vec<_>>();
        assert_eq!(partitioned, vec![1, 2, 4, 5, 7, 8, 3, 6]);
    }

    #[test]
    fn test_partitioned_by_all_pass() {
        let partitioned = PartitionedBy::new("abc".chars(), |_: &char| true).collect::<String>();
        assert_eq!(partitioned, "abc");
    }
}
