use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// The element has no representable inverse in the group's domain.
    #[error("{value} has no inverse")]
    NoInverse { value: String },
    /// A modular group needs a modulus of at least 1.
    #[error("modulus must be at least 1")]
    ZeroModulus,
}

pub type Result<T> = std::result::Result<T, Error>;
