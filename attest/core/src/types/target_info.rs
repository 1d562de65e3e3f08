// Copyright (c) 2024 The LocalAttest Project

//! This module contains the target descriptor used to address an enclave
//! context for local attestation.

use crate::types::{
    attributes::{Attributes, ATTRIBUTES_SIZE},
    config_id::{ConfigId, CONFIG_ID_SIZE},
    measurement::{MrEnclave, MEASUREMENT_SIZE},
    ConfigSecurityVersion, MiscSelect,
};
use la_util_encodings::{
    Error as EncodingError, FromX64, ToX64, X64Layout, X64_U16_SIZE, X64_U32_SIZE,
};
use serde::{Deserialize, Serialize};

// byte positions for each field in the fixed layout
const TI_MRENCLAVE_START: usize = 0;
const TI_MRENCLAVE_END: usize = TI_MRENCLAVE_START + MEASUREMENT_SIZE;
const TI_ATTRIBUTES_START: usize = TI_MRENCLAVE_END;
const TI_ATTRIBUTES_END: usize = TI_ATTRIBUTES_START + ATTRIBUTES_SIZE;
const TI_CONFIGSVN_START: usize = TI_ATTRIBUTES_END;
const TI_CONFIGSVN_END: usize = TI_CONFIGSVN_START + X64_U16_SIZE;
const TI_SELECT_START: usize = TI_CONFIGSVN_END;
const TI_SELECT_END: usize = TI_SELECT_START + X64_U32_SIZE;
const TI_CONFIGID_START: usize = TI_SELECT_END;
const TI_CONFIGID_END: usize = TI_CONFIGID_START + CONFIG_ID_SIZE;

/// The length of a target descriptor, in bytes
pub const TARGET_INFO_SIZE: usize = TI_CONFIGID_END;

/// An opaque structure used to address an enclave context for local
/// attestation.
///
/// A verifier derives this from its own identity and embeds it in an
/// assertion request; the platform uses the fields to scope the report key
/// a generator's report is authenticated under, so that only the named
/// target can re-derive that key.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct TargetInfo {
    /// The measurement of the target context's code
    pub mr_enclave: MrEnclave,
    /// The attributes the target context was launched with
    pub attributes: Attributes,
    /// The security version of the target context's configuration
    pub config_svn: ConfigSecurityVersion,
    /// The extended feature request mask of the target context
    pub misc_select: MiscSelect,
    /// The configuration the target context was launched with
    pub config_id: ConfigId,
}

impl X64Layout for TargetInfo {
    const X64_SIZE: usize = TARGET_INFO_SIZE;
}

/// Serialization into the fixed layout
impl ToX64 for TargetInfo {
    fn to_x64(&self, dest: &mut [u8]) -> Result<usize, EncodingError> {
        if dest.len() < TARGET_INFO_SIZE {
            return Err(EncodingError::InvalidOutputLength);
        }

        dest[TI_MRENCLAVE_START..TI_MRENCLAVE_END].copy_from_slice(self.mr_enclave.as_ref());
        self.attributes
            .to_x64(&mut dest[TI_ATTRIBUTES_START..TI_ATTRIBUTES_END])?;
        dest[TI_CONFIGSVN_START..TI_CONFIGSVN_END].copy_from_slice(&self.config_svn.to_le_bytes());
        dest[TI_SELECT_START..TI_SELECT_END].copy_from_slice(&self.misc_select.to_le_bytes());
        dest[TI_CONFIGID_START..TI_CONFIGID_END].copy_from_slice(self.config_id.as_ref());

        Ok(TARGET_INFO_SIZE)
    }
}

/// Deserialization from the fixed layout
impl FromX64 for TargetInfo {
    fn from_x64(src: &[u8]) -> Result<Self, EncodingError> {
        if src.len() < TARGET_INFO_SIZE {
            return Err(EncodingError::InvalidInputLength);
        }

        Ok(Self {
            mr_enclave: MrEnclave::try_from(&src[TI_MRENCLAVE_START..TI_MRENCLAVE_END])?,
            attributes: Attributes::from_x64(&src[TI_ATTRIBUTES_START..TI_ATTRIBUTES_END])?,
            config_svn: u16::from_le_bytes(
                (&src[TI_CONFIGSVN_START..TI_CONFIGSVN_END]).try_into()?,
            ),
            misc_select: u32::from_le_bytes((&src[TI_SELECT_START..TI_SELECT_END]).try_into()?),
            config_id: ConfigId::try_from(&src[TI_CONFIGID_START..TI_CONFIGID_END])?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use la_util_serial::{deserialize, serialize};

    fn target_info_sample() -> TargetInfo {
        let mut config_id = [0u8; CONFIG_ID_SIZE];
        for (idx, byte) in config_id.iter_mut().enumerate() {
            *byte = idx as u8;
        }

        TargetInfo {
            mr_enclave: [
                1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
                23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
            ]
            .into(),
            attributes: Attributes::new(0xffff_ffff_ffff_ffff, 0x0000_0000_0000_0000),
            config_svn: 0xDEAD,
            misc_select: 0xCAFE_BEEF,
            config_id: config_id.into(),
        }
    }

    #[test]
    fn test_bad_x64_write_len() {
        let ti = target_info_sample();
        let mut outbuf = [0u8; TARGET_INFO_SIZE - 1];

        assert_eq!(
            ti.to_x64(&mut outbuf),
            Err(EncodingError::InvalidOutputLength)
        );
    }

    #[test]
    fn test_bad_x64_read_len() {
        let ti = target_info_sample();
        let bytes = ti.to_x64_vec();

        assert_eq!(
            TargetInfo::from_x64(&bytes[..TARGET_INFO_SIZE - 1]),
            Err(EncodingError::InvalidInputLength)
        );
    }

    #[test]
    fn test_x64_round_trip() {
        let ti = target_info_sample();
        let bytes = ti.to_x64_vec();
        assert_eq!(bytes.len(), TARGET_INFO_SIZE);

        let ti2 = TargetInfo::from_x64(&bytes).expect("TargetInfo decode failure");
        assert_eq!(ti, ti2);
    }

    #[test]
    fn test_target_info_serde() {
        let ti1 = target_info_sample();
        let ti1ser = serialize(&ti1).expect("TargetInfo serialization failure");
        let ti2: TargetInfo = deserialize(&ti1ser).expect("TargetInfo deserialization failure");
        assert_eq!(ti1, ti2);
    }
}
