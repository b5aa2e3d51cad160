use std::collections::VecDeque;

use crate::cursor::Cursor;

/// A sequence without its leading and trailing runs of excluded elements.
///
/// Leading excluded elements are dropped as they are read. Excluded elements
/// after that are held back until a kept element shows they are not
/// trailing; whatever is held back at the end is dropped.
#[derive(Debug, Clone)]
pub struct TrimBy<I, P>
where
    I: Iterator,
{
    cursor: Cursor<I>,
    is_excluded: P,
    started: bool,
    held_back: VecDeque<I::Item>,
    // the kept element to yield once `held_back` is drained
    resume: Option<I::Item>,
}

impl<I, P> TrimBy<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(iter: I, is_excluded: P) -> Self {
        TrimBy {
            cursor: Cursor::new(iter),
            is_excluded,
            started: false,
            held_back: VecDeque::new(),
            resume: None,
        }
    }
}

impl<I, P> Iterator for TrimBy<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.resume.is_some() {
            if let Some(item) = self.held_back.pop_front() {
                return Some(item);
            }
            return self.resume.take();
        }
        loop {
            let item = self.cursor.pull()?;
            if !(self.is_excluded)(&item) {
                self.started = true;
                if self.held_back.is_empty() {
                    return Some(item);
                }
                self.resume = Some(item);
                return self.held_back.pop_front();
            }
            if self.started {
                self.held_back.push_back(item);
            }
        }
    }
}
