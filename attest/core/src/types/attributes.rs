// Copyright (c) 2024 The LocalAttest Project

//! This module contains the attributes type carried in reports and target
//! descriptors.

use bitflags::bitflags;
use la_util_encodings::{Error as EncodingError, FromX64, ToX64, X64Layout, X64_U64_SIZE};
use serde::{Deserialize, Serialize};

const ATTRIBUTES_FLAGS_START: usize = 0;
const ATTRIBUTES_FLAGS_END: usize = ATTRIBUTES_FLAGS_START + X64_U64_SIZE;
const ATTRIBUTES_XFRM_START: usize = ATTRIBUTES_FLAGS_END;
const ATTRIBUTES_XFRM_END: usize = ATTRIBUTES_XFRM_START + X64_U64_SIZE;

/// The length of the attributes structure, in bytes
pub const ATTRIBUTES_SIZE: usize = ATTRIBUTES_XFRM_END;

bitflags! {
    /// The attribute flag bits this platform knows how to interpret.
    ///
    /// The flags field of a report body is authenticated as a raw `u64`;
    /// interpretation into these bits happens only when an identity is
    /// extracted from a verified report.
    #[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
    pub struct AttributeFlags: u64 {
        /// The context has been initialized and may be entered
        const INIT = 0x0000_0000_0000_0001;
        /// The context permits debugger access
        const DEBUG = 0x0000_0000_0000_0002;
        /// The context runs in 64-bit mode
        const MODE_64BIT = 0x0000_0000_0000_0004;
        /// The context may request the provisioning key
        const PROVISION_KEY = 0x0000_0000_0000_0010;
        /// The context may request the launch-token key
        const EINIT_TOKEN_KEY = 0x0000_0000_0000_0020;
        /// The context uses control-flow enforcement
        const CET = 0x0000_0000_0000_0040;
        /// The context uses key-separation-and-sharing identities
        const KSS = 0x0000_0000_0000_0080;
    }
}

/// The flag and extended-feature bits describing how an enclave context was
/// launched.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Attributes {
    flags: u64,
    xfrm: u64,
}

impl Attributes {
    /// Create a new attributes value from its raw fields
    pub fn new(flags: u64, xfrm: u64) -> Self {
        Self { flags, xfrm }
    }

    /// Retrieve the raw flag bits
    pub fn flags(&self) -> u64 {
        self.flags
    }

    /// Retrieve the extended-feature request mask
    pub fn xfrm(&self) -> u64 {
        self.xfrm
    }
}

impl X64Layout for Attributes {
    const X64_SIZE: usize = ATTRIBUTES_SIZE;
}

impl ToX64 for Attributes {
    fn to_x64(&self, dest: &mut [u8]) -> Result<usize, EncodingError> {
        if dest.len() < ATTRIBUTES_SIZE {
            return Err(EncodingError::InvalidOutputLength);
        }

        dest[ATTRIBUTES_FLAGS_START..ATTRIBUTES_FLAGS_END]
            .copy_from_slice(&self.flags.to_le_bytes());
        dest[ATTRIBUTES_XFRM_START..ATTRIBUTES_XFRM_END].copy_from_slice(&self.xfrm.to_le_bytes());
        Ok(ATTRIBUTES_SIZE)
    }
}

impl FromX64 for Attributes {
    fn from_x64(src: &[u8]) -> Result<Self, EncodingError> {
        if src.len() < ATTRIBUTES_SIZE {
            return Err(EncodingError::InvalidInputLength);
        }

        Ok(Self {
            flags: u64::from_le_bytes(
                (&src[ATTRIBUTES_FLAGS_START..ATTRIBUTES_FLAGS_END]).try_into()?,
            ),
            xfrm: u64::from_le_bytes((&src[ATTRIBUTES_XFRM_START..ATTRIBUTES_XFRM_END]).try_into()?),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use la_util_serial::{deserialize, serialize};

    #[test]
    fn test_serde() {
        let attrs = Attributes::new(0x0102_0304_0506_0708, 0x0807_0605_0403_0201);
        let attr_ser = serialize(&attrs).expect("Could not serialize attributes");
        let attrs2: Attributes = deserialize(&attr_ser).expect("Could not deserialize attributes");
        assert_eq!(attrs, attrs2);
        assert_eq!(0x0102_0304_0506_0708, attrs2.flags());
        assert_eq!(0x0807_0605_0403_0201, attrs2.xfrm());
    }

    #[test]
    fn test_x64_round_trip() {
        let attrs = Attributes::new(
            (AttributeFlags::INIT | AttributeFlags::MODE_64BIT).bits(),
            0x0000_0000_0000_0003,
        );
        let bytes = attrs.to_x64_vec();
        assert_eq!(bytes.len(), ATTRIBUTES_SIZE);
        let attrs2 = Attributes::from_x64(&bytes).expect("Could not decode attributes");
        assert_eq!(attrs, attrs2);
    }

    #[test]
    fn test_unknown_bits_are_not_flags() {
        let attrs = Attributes::new(0x8000_0000_0000_0001, 0);
        assert!(AttributeFlags::from_bits(attrs.flags()).is_none());
    }
}
