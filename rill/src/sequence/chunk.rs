use std::fmt;

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Fixed-size runs of a sequence; the last run may be shorter.
///
/// Elements are pulled one at a time and at most one chunk is held.
pub struct Chunks<I>
where
    I: Iterator,
{
    cursor: Cursor<I>,
    size: usize,
}

// the cursor holds an element, so both impls need bounds on `I::Item`
impl<I> Clone for Chunks<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Chunks {
            cursor: self.cursor.clone(),
            size: self.size,
        }
    }
}

impl<I> fmt::Debug for Chunks<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Chunks")
            .field("cursor", &self.cursor)
            .field("size", &self.size)
            .finish()
    }
}

impl<I> Chunks<I>
where
    I: Iterator,
{
    pub(crate) fn new(iter: I, size: usize) -> Result<Self> {
        if size < 1 {
            return Err(Error::invalid_argument(
                "size",
                format!("chunk size cannot be less than 1, got {size}"),
            ));
        }
        Ok(Chunks {
            cursor: Cursor::new(iter),
            size,
        })
    }
}

impl<I> Iterator for Chunks<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let (lower, _) = self.cursor.size_hint();
        let first = self.cursor.pull()?;
        let mut chunk = Vec::with_capacity(self.size.min(lower.max(1)));
        chunk.push(first);
        while chunk.len() < self.size {
            match self.cursor.pull() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}
