use crate::error::Result;

/// The definition of a mathematical group over [`Group::Element`].
///
/// A group definition is a value rather than a property of the element
/// type, so the same type can take part in several groups (integers under
/// addition, integers under xor, integers modulo `n`).
///
/// Laws that implementations must uphold:
///
/// - `operate` is associative
/// - `operate(identity, a) == a` and `operate(a, identity) == a`
/// - if `invert(a)` is `Ok(b)` then `operate(a, b) == identity`
///
/// Some definitions are only approximately a group because the element type
/// is bounded. `invert` returns [`crate::Error::NoInverse`] for elements
/// whose inverse cannot be represented, never a wrong value.
pub trait Group {
    type Element: PartialEq;

    /// The identity element.
    fn identity(&self) -> Self::Element;

    /// The group operation.
    fn operate(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// The inverse of `a`.
    fn invert(&self, a: &Self::Element) -> Result<Self::Element>;

    /// The element `c` such that `operate(a, c) == target`, computed as
    /// `operate(target, invert(a))`.
    ///
    /// For abelian groups such as integer addition this is the usual
    /// "what do I add to `a` to reach `target`".
    fn complement(&self, target: &Self::Element, a: &Self::Element) -> Result<Self::Element> {
        let inverse = self.invert(a)?;
        Ok(self.operate(target, &inverse))
    }
}

impl<G: Group + ?Sized> Group for &G {
    type Element = G::Element;

    fn identity(&self) -> Self::Element {
        (**self).identity()
    }

    fn operate(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (**self).operate(a, b)
    }

    fn invert(&self, a: &Self::Element) -> Result<Self::Element> {
        (**self).invert(a)
    }
}
