//! Parallel iteration when the `parallel` feature is enabled, plain
//! sequential iteration otherwise.
//!
//! Call sites write `into_par_iter()` either way; without rayon it resolves
//! to `into_iter()` and the rest of the chain uses the standard `Iterator`
//! methods.

#[cfg(feature = "parallel")]
pub(crate) use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    pub(crate) trait IntoParallelIterator {
        type Iter;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;

        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub(crate) use sequential::*;
