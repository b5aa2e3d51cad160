use std::mem;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
enum State<T> {
    NotStarted,
    Positioned(T),
    // positioned, but the current value has been moved out
    Taken,
    Exhausted,
}

/// A forward-only, single-pass position over an iterator.
///
/// A cursor is advanced first and read second. [`Cursor::advance`] returns
/// whether an element is available; [`Cursor::current`] reads it. Reading
/// before the first successful advance, after the value was taken, or after
/// exhaustion is an error rather than a stale value.
///
/// Once `advance` has returned `false` the upstream iterator is never polled
/// again.
#[derive(Debug, Clone)]
pub struct Cursor<I>
where
    I: Iterator,
{
    iter: I,
    state: State<I::Item>,
}

impl<I> Cursor<I>
where
    I: Iterator,
{
    pub fn new(iter: I) -> Self {
        Cursor {
            iter,
            state: State::NotStarted,
        }
    }

    /// Move to the next element, returning whether there is one.
    pub fn advance(&mut self) -> bool {
        if matches!(self.state, State::Exhausted) {
            return false;
        }
        match self.iter.next() {
            Some(item) => {
                self.state = State::Positioned(item);
                true
            }
            None => {
                self.state = State::Exhausted;
                false
            }
        }
    }

    /// The element the cursor is positioned on.
    pub fn current(&self) -> Result<&I::Item> {
        match &self.state {
            State::Positioned(item) => Ok(item),
            _ => Err(Error::NotPositioned),
        }
    }

    /// Move the current element out of the cursor.
    ///
    /// The cursor stays at its position; the next read needs an `advance`.
    pub fn take_current(&mut self) -> Result<I::Item> {
        match mem::replace(&mut self.state, State::Taken) {
            State::Positioned(item) => Ok(item),
            other => {
                self.state = other;
                Err(Error::NotPositioned)
            }
        }
    }

    /// The element the cursor holds, advancing first if it holds none.
    ///
    /// Returns `None` once the iterator is exhausted.
    pub fn peek(&mut self) -> Option<&I::Item> {
        if !self.is_positioned() && !self.advance() {
            return None;
        }
        self.current().ok()
    }

    /// Advance and move the new element out in one step.
    pub fn pull(&mut self) -> Option<I::Item> {
        if self.advance() {
            self.take_current().ok()
        } else {
            None
        }
    }

    pub fn is_positioned(&self) -> bool {
        matches!(self.state, State::Positioned(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }
}

impl<I> Iterator for Cursor<I>
where
    I: Iterator,
{
    type Item = I::Item;

    /// Yields a held element first, then continues with fresh ones.
    fn next(&mut self) -> Option<I::Item> {
        if self.is_positioned() {
            return self.take_current().ok();
        }
        self.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            return (0, Some(0));
        }
        let held = usize::from(self.is_positioned());
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(held),
            upper.and_then(|upper| upper.checked_add(held)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_started() {
        let cursor = Cursor::new([1, 2].into_iter());
        assert_eq!(cursor.current(), Err(Error::NotPositioned));
    }

    #[test]
    fn test_advance_then_read() {
        let mut cursor = Cursor::new([1, 2].into_iter());
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&1));
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&2));
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), Err(Error::NotPositioned));
    }

    #[test]
    fn test_exhausted_is_permanent() {
        let mut polls = 0;
        let iter = std::iter::from_fn(|| {
            polls += 1;
            None::<i32>
        });
        let mut cursor = Cursor::new(iter);
        assert!(!cursor.advance());
        assert!(!cursor.advance());
        assert!(!cursor.advance());
        drop(cursor);
        assert_eq!(polls, 1);
    }

    #[test]
    fn test_take() {
        let mut cursor = Cursor::new(["a".to_string()].into_iter());
        assert!(cursor.advance());
        assert_eq!(cursor.take_current(), Ok("a".to_string()));
        assert_eq!(cursor.take_current(), Err(Error::NotPositioned));
        assert_eq!(cursor.current(), Err(Error::NotPositioned));
        assert!(!cursor.advance());
        assert_eq!(cursor.take_current(), Err(Error::NotPositioned));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = Cursor::new([1, 2].into_iter());
        assert_eq!(cursor.peek(), Some(&1));
        assert_eq!(cursor.peek(), Some(&1));
        assert_eq!(cursor.collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_iterator_size_hint() {
        let mut cursor = Cursor::new([1, 2, 3].into_iter());
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.advance();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.take_current().unwrap();
        assert_eq!(cursor.size_hint(), (2, Some(2)));
    }
}
