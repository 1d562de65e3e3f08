// Copyright (c) 2024 The LocalAttest Project

//! This module contains the report authentication code type.

use crate::impl_newtype_for_bytearray;
use subtle::{Choice, ConstantTimeEq};

/// The length of a report authentication code, in bytes
pub const MAC_SIZE: usize = 16;

/// A report authentication code
///
/// Comparisons against a freshly computed code must go through
/// [`ConstantTimeEq`] so that a mismatch reveals nothing about how many
/// bytes matched.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Mac([u8; MAC_SIZE]);

impl_newtype_for_bytearray! {
    Mac, MAC_SIZE;
}

impl ConstantTimeEq for Mac {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use la_util_serial::{deserialize, serialize};

    #[test]
    fn test_serde() {
        let src = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        let mac: Mac = src.into();
        let serialized = serialize(&mac).expect("Error serializing mac.");
        let mac2: Mac = deserialize(&serialized).expect("Error deserializing mac");
        assert_eq!(mac, mac2);
    }

    #[test]
    fn test_ct_eq() {
        let mac: Mac = [1u8; MAC_SIZE].into();
        let same: Mac = [1u8; MAC_SIZE].into();
        let other: Mac = [2u8; MAC_SIZE].into();

        assert_eq!(mac.ct_eq(&same).unwrap_u8(), 1);
        assert_eq!(mac.ct_eq(&other).unwrap_u8(), 0);
    }
}
