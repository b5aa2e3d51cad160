//! Lazy sequence operators and in-place array transforms.
//!
//! [`SequenceExt`] adds operators to every iterator: permutations, sorted
//! merges, chunking and splitting, majority vote, increasing runs, cyclic
//! shifts, pair enumeration and more. They pull from their source one
//! element at a time through a [`Cursor`] and never mutate it.
//!
//! The [`array`] module rearranges slices and matrices in place.
//!
//! Pairing elements that combine to a target is generic over a group
//! definition from [`rill_group`], so the same operator finds pairs that sum
//! to a value, xor to a value or add up modulo some number.

pub mod array;
mod cursor;
pub mod equality;
pub mod error;
mod parallel;
pub mod sequence;

pub use cursor::Cursor;
pub use equality::{Direct, Equality, NullSafe};
pub use error::{Error, Result, Unsupported};
pub use sequence::{merge_all, EmptyRuns, SequenceExt};

pub use array::{Matrix, SliceExt};

pub use rill_group::{Addition, Group, ModularAddition, Xor, INTEGER_ADDITION};
