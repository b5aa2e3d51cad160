use crate::error::{Error, Result};

use super::known_len;

#[derive(Debug, Clone)]
enum Edit<T> {
    Skip,
    Replace(Option<T>),
}

/// A sequence with the element at one index dropped or replaced.
///
/// When the length of the input is known up front an out of range index is
/// rejected on construction. Otherwise the sequence is passed through and,
/// if it ends before reaching the index, a final `Err(OutOfRange)` item is
/// yielded.
#[derive(Debug, Clone)]
pub struct EditAt<I>
where
    I: Iterator,
{
    iter: I,
    index: usize,
    position: usize,
    edit: Edit<I::Item>,
    done: bool,
}

impl<I> EditAt<I>
where
    I: Iterator,
{
    fn new(iter: I, index: usize, edit: Edit<I::Item>) -> Result<Self> {
        if let Some(len) = known_len(&iter) {
            if index >= len {
                return Err(Error::OutOfRange {
                    index,
                    len: Some(len),
                });
            }
        }
        Ok(EditAt {
            iter,
            index,
            position: 0,
            edit,
            done: false,
        })
    }

    pub(crate) fn skip(iter: I, index: usize) -> Result<Self> {
        Self::new(iter, index, Edit::Skip)
    }

    pub(crate) fn replace(iter: I, index: usize, replacement: I::Item) -> Result<Self> {
        Self::new(iter, index, Edit::Replace(Some(replacement)))
    }
}

impl<I> Iterator for EditAt<I>
where
    I: Iterator,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Result<I::Item>> {
        if self.done {
            return None;
        }
        loop {
            let Some(item) = self.iter.next() else {
                self.done = true;
                return (self.position <= self.index).then_some(Err(Error::OutOfRange {
                    index: self.index,
                    len: None,
                }));
            };
            let position = self.position;
            self.position += 1;
            if position != self.index {
                return Some(Ok(item));
            }
            match &mut self.edit {
                Edit::Skip => continue,
                Edit::Replace(replacement) => {
                    return Some(Ok(replacement.take().unwrap_or(item)));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let skipped = usize::from(
            matches!(self.edit, Edit::Skip) && self.position <= self.index,
        );
        // an unknown length may end in one extra error item
        (
            lower.saturating_sub(skipped),
            upper.and_then(|upper| upper.checked_add(1)),
        )
    }
}
