// Copyright (c) 2024 The LocalAttest Project

//! This module contains the CPU security version type.

use crate::impl_newtype_for_bytearray;

/// The length of a CPU security version, in bytes
pub const CPU_SVN_SIZE: usize = 16;

/// The security version of the platform's microcode and firmware at the time
/// a context was launched.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct CpuSecurityVersion([u8; CPU_SVN_SIZE]);

impl_newtype_for_bytearray! {
    CpuSecurityVersion, CPU_SVN_SIZE;
}

#[cfg(test)]
mod test {
    use super::*;
    use la_util_serial::{deserialize, serialize};

    #[test]
    fn test_serde() {
        let src = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        let svn: CpuSecurityVersion = src.into();
        let serialized = serialize(&svn).expect("Error serializing cpu svn.");
        let svn2: CpuSecurityVersion = deserialize(&serialized).expect("Error deserializing cpu svn");
        assert_eq!(svn, svn2);
    }
}
