use std::fmt;
use std::marker::PhantomData;

use num_traits::{CheckedNeg, PrimInt, Signed, Unsigned, WrappingAdd};

use crate::error::{Error, Result};
use crate::group::Group;

/// The canonical group of `i32` under addition.
pub const INTEGER_ADDITION: Addition<i32> = Addition::new();

/// Signed integers under addition.
///
/// The operation wraps on overflow so that it stays total. The most
/// negative value of the type has no representable negation, so inverting
/// it fails with [`Error::NoInverse`].
#[derive(Debug, PartialEq, Eq)]
pub struct Addition<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> Addition<T> {
    pub const fn new() -> Self {
        Addition {
            _element: PhantomData,
        }
    }
}

// derives would put bounds on T
impl<T> Clone for Addition<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Addition<T> {}

impl<T> Default for Addition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Group for Addition<T>
where
    T: PrimInt + Signed + CheckedNeg + WrappingAdd + fmt::Debug,
{
    type Element = T;

    fn identity(&self) -> T {
        T::zero()
    }

    fn operate(&self, a: &T, b: &T) -> T {
        a.wrapping_add(b)
    }

    fn invert(&self, a: &T) -> Result<T> {
        a.checked_neg().ok_or_else(|| Error::NoInverse {
            value: format!("{:?}", a),
        })
    }
}

/// Unsigned integers under bitwise exclusive or.
///
/// Every element is its own inverse.
#[derive(Debug, PartialEq, Eq)]
pub struct Xor<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> Xor<T> {
    pub const fn new() -> Self {
        Xor {
            _element: PhantomData,
        }
    }
}

impl<T> Clone for Xor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Xor<T> {}

impl<T> Default for Xor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Group for Xor<T>
where
    T: PrimInt + Unsigned,
{
    type Element = T;

    fn identity(&self) -> T {
        T::zero()
    }

    fn operate(&self, a: &T, b: &T) -> T {
        *a ^ *b
    }

    fn invert(&self, a: &T) -> Result<T> {
        Ok(*a)
    }
}
