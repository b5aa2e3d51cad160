use crate::error::{Error, Result};
use crate::group::Group;

/// `u64` values in `[0, modulus)` under addition modulo `modulus`.
///
/// Values outside that range are not group elements; inverting one fails
/// with [`Error::NoInverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModularAddition {
    modulus: u64,
}

impl ModularAddition {
    pub fn new(modulus: u64) -> Result<Self> {
        if modulus == 0 {
            return Err(Error::ZeroModulus);
        }
        Ok(ModularAddition { modulus })
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl Group for ModularAddition {
    type Element = u64;

    fn identity(&self) -> u64 {
        0
    }

    fn operate(&self, a: &u64, b: &u64) -> u64 {
        // widen so that a + b cannot overflow
        ((*a as u128 + *b as u128) % self.modulus as u128) as u64
    }

    fn invert(&self, a: &u64) -> Result<u64> {
        if *a >= self.modulus {
            return Err(Error::NoInverse {
                value: a.to_string(),
            });
        }
        Ok((self.modulus - a) % self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_modulus() {
        assert_eq!(ModularAddition::new(0), Err(Error::ZeroModulus));
    }

    #[test]
    fn test_invert() {
        let clock = ModularAddition::new(12).unwrap();
        assert_eq!(clock.invert(&0), Ok(0));
        assert_eq!(clock.invert(&5), Ok(7));
        assert!(clock.invert(&12).is_err());
    }

    #[test]
    fn test_operate_large() {
        let group = ModularAddition::new(u64::MAX).unwrap();
        assert_eq!(group.operate(&(u64::MAX - 1), &2), 1);
    }
}
