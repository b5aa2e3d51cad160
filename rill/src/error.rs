use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};
use thiserror::Error;

/// Errors raised by sequence operators and array transforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// A parameter has a value the operation cannot work with, such as a
    /// chunk size of zero.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    /// An index falls outside the sequence or array.
    ///
    /// `len` is known when the length of the input was known; for
    /// single-pass sequences the error is raised upon reaching the end.
    #[error("index {index} is out of range{}", .len.map(|len| format!(" for length {len}")).unwrap_or_default())]
    OutOfRange { index: usize, len: Option<usize> },
    /// Only a square matrix can be rotated in place.
    #[error("only a square matrix can be rotated in place, got {rows}x{cols}")]
    ShapeInvalid { rows: usize, cols: usize },
    /// A group element had no inverse.
    ///
    /// Always wraps [`rill_group::Error::NoInverse`]; other group errors
    /// convert to [`Error::InvalidArgument`].
    #[error(transparent)]
    NoInverse(rill_group::Error),
    /// The operation is intentionally not implemented.
    #[error("unsupported operation: {0}")]
    Unsupported(Unsupported),
    /// A cursor was read while not positioned on an element.
    #[error("cursor is not positioned on an element")]
    NotPositioned,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Operations that are deliberately left out.
///
/// They fail explicitly rather than approximating their intended result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Unsupported {
    /// Distinct permutations.
    ///
    /// Permutations that skip repeated arrangements of equal values, such
    /// as `[A,A,B] => [[A,A,B],[A,B,A],[B,A,A]]`. Use `permutations` and
    /// deduplicate if needed.
    DistinctPermutations,
    /// Choosing more than one element.
    ///
    /// Only selections of size 0 and 1 are supported by `choose`; use
    /// `unique_pairs` for selections of size 2.
    ChooseMany,
    /// Find and replace of a subsequence.
    ///
    /// Replacing every occurrence of a subsequence with another, such as
    /// `[A,B,A,C,A,B,C,C,A]` with `[C,A]` replaced by `[D]`.
    FindAndReplace,
}

impl Unsupported {
    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    // the first paragraph of the doc comment is the message, the rest the note
    fn documentation_pieces(&self) -> (&str, &str) {
        let documentation = self.get_documentation().unwrap_or_default();
        documentation
            .split_once("\n\n")
            .unwrap_or((documentation, ""))
    }
}

impl From<rill_group::Error> for Error {
    fn from(error: rill_group::Error) -> Self {
        match error {
            rill_group::Error::ZeroModulus => {
                Error::invalid_argument("modulus", error.to_string())
            }
            rill_group::Error::NoInverse { .. } => Error::NoInverse(error),
        }
    }
}

impl From<Unsupported> for Error {
    fn from(unsupported: Unsupported) -> Self {
        Error::Unsupported(unsupported)
    }
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
