use std::mem;

use crate::cursor::Cursor;

/// Maximal strictly increasing contiguous runs of at least two elements.
///
/// Only the current run is held in memory, so long increasing or
/// decreasing stretches are cheap.
#[derive(Debug, Clone)]
pub struct IncreasingRuns<I>
where
    I: Iterator,
{
    cursor: Cursor<I>,
    run: Vec<I::Item>,
}

impl<I> IncreasingRuns<I>
where
    I: Iterator,
    I::Item: PartialOrd,
{
    pub(crate) fn new(iter: I) -> Self {
        IncreasingRuns {
            cursor: Cursor::new(iter),
            run: Vec::new(),
        }
    }
}

impl<I> Iterator for IncreasingRuns<I>
where
    I: Iterator,
    I::Item: PartialOrd,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        loop {
            let Some(item) = self.cursor.pull() else {
                let run = mem::take(&mut self.run);
                return (run.len() >= 2).then_some(run);
            };
            let extends = match self.run.last() {
                Some(last) => *last < item,
                None => true,
            };
            if extends {
                self.run.push(item);
            } else if self.run.len() >= 2 {
                return Some(mem::replace(&mut self.run, vec![item]));
            } else {
                self.run.clear();
                self.run.push(item);
            }
        }
    }
}
