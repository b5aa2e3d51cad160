//! Choosing how two elements are compared for equality.
//!
//! Operators that compare elements (splitting on a value, majority vote,
//! run-length counting) are generic over an [`Equality`]. The choice is
//! made at compile time: [`Direct`] binds to the element's own
//! [`PartialEq`] with no indirection, [`NullSafe`] handles optional
//! elements without looking inside an absent operand, and any closure
//! `Fn(&T, &T) -> bool` can stand in when the caller has its own notion of
//! equality.

/// A two-argument equality test over `T`.
pub trait Equality<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Equality through `T`'s own [`PartialEq`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Direct;

impl<T: PartialEq + ?Sized> Equality<T> for Direct {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Equality over optional values.
///
/// Two absent values are equal, an absent and a present value are not,
/// and two present values are compared with the wrapped equality.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullSafe<E>(pub E);

impl<T, E: Equality<T>> Equality<Option<T>> for NullSafe<E> {
    #[inline]
    fn equals(&self, a: &Option<T>, b: &Option<T>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.0.equals(a, b),
            _ => false,
        }
    }
}

impl<T: ?Sized, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// The equality value-based operators use for `T`: its own `PartialEq`,
/// statically dispatched.
pub fn resolve<T: PartialEq + ?Sized>() -> impl Equality<T> + Copy {
    Direct
}
