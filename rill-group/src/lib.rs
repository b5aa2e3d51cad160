mod error;
mod group;
mod integer;
mod modular;

pub use error::{Error, Result};
pub use group::Group;
pub use integer::{Addition, Xor, INTEGER_ADDITION};
pub use modular::ModularAddition;
